pub mod add_student_modal;
pub mod management_table;
pub mod news_form;
pub mod quotes_table;
pub mod sidebar;
