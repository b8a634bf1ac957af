/// Errors that can occur when mutating a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The value counts as "nothing entered" (see [`crate::NodeValue::is_blank`]).
    #[error("blank value rejected")]
    BlankValue,
}
