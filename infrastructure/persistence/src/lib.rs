pub mod bootstrap;
pub mod db;
pub mod basket {
    pub mod entity;
    pub mod mysql;
    pub mod postgres;
}
