pub mod interface;
pub mod mongo;

pub use interface::RecordStore;
pub use mongo::MongoStore;
