//! [`Handler`] abstractions.

/// Executable handler.
///
/// Handlers are synchronous: everything they operate on is already in
/// memory.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// If this [`Handler`] fails to execute.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
