use crate::kernel::catalog::ViewContent;
use crate::kernel::route::ViewId;
use crate::kernel::view_state::ViewFault;

#[derive(Debug)]
pub enum AppMessage {
    ViewLoaded {
        generation: u64,
        view: ViewId,
        result: Result<ViewContent, ViewFault>,
    },
}
