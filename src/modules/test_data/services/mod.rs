mod sample_data;
mod test_data_importer;

pub use sample_data::generate_sample_test_data;
pub use test_data_importer::TestDataImporter;
