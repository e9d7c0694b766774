pub mod documents;
pub mod kv {
    pub mod file_store;
    pub mod memory_store;
}
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod address {
    pub mod repository;
}
pub mod profile {
    pub mod repository;
}
pub mod soil {
    pub mod fixture_monitor;
}
