//! Lookup data compiled from `data/` by `build.rs`.

pub mod price_table_data {
    include!(concat!(env!("OUT_DIR"), "/price_table_data.rs"));
}
