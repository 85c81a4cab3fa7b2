use super::loader::LoadTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadView(LoadTicket),
    /// The in-flight load (if any) no longer matters.
    CancelLoad,
}
