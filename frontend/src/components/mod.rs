pub mod confirm_modal;
pub mod edit_variable_modal;
pub mod toast;
pub mod variable_table;

pub use toast::ToastHost;
pub use variable_table::VariableTable;
