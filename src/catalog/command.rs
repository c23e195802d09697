pub mod add_reader_cmd;
pub mod create_book_cmd;
pub mod reassign_isbn_cmd;
pub mod record_read_cmd;
pub mod rename_email_cmd;
pub mod report_cmd;
