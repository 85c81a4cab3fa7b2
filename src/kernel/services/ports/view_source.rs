use crate::kernel::catalog::ViewContent;
use crate::kernel::route::ViewId;
use crate::kernel::view_state::ViewFault;

/// Supplies the content of a view on demand. Called off the UI thread and
/// allowed to block.
pub trait ViewSource: Send + Sync + 'static {
    fn load(&self, view: ViewId) -> Result<ViewContent, ViewFault>;
}
