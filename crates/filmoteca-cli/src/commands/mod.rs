pub mod catalog;
pub mod config;
pub mod demo;
pub mod reports;

pub use catalog::{
    run_add, run_delete, run_find, run_indexes, run_init, run_list, run_rate, run_review_add,
    run_review_delete, FindBy,
};
pub use config::{run_config, ConfigAction};
pub use demo::run_demo;
pub use reports::{run_report, ReportKind};
