use kernel::KernelError;

/// Maps a backend error onto the kernel's error context.
pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
