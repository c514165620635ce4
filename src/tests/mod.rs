pub mod test_buffer;
pub mod test_handle;
