pub mod gaql;
