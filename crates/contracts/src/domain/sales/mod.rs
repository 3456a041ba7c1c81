mod record;

pub use record::SaleRecord;
