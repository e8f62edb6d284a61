mod fs_store;

pub use self::fs_store::FsObjectStore;
