use super::catalog::ViewContent;
use super::intent::NavigationIntent;
use super::view_state::ViewFault;

#[derive(Debug, Clone)]
pub enum Action {
    Navigate(NavigationIntent),
    HistoryBack,
    HistoryForward,
    Reload,
    ViewLoaded {
        generation: u64,
        result: Result<ViewContent, ViewFault>,
    },
    ViewFaulted {
        generation: u64,
        fault: ViewFault,
    },
    SearchFocus,
    SearchBlur,
    SearchAppend(char),
    SearchBackspace,
    SearchClear,
    ToggleSidebar,
}
