pub mod checkbox;
pub mod registration_form;
pub mod student_table;
pub mod text_input;

pub use checkbox::*;
pub use registration_form::*;
pub use student_table::*;
pub use text_input::*;
