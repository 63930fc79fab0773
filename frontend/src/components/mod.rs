pub mod columns;
pub mod flash;
pub mod forms;
pub mod schema_select;
