use chipchip_runtime::ApiResponse;

/// Events delivered to the TUI loop from other threads.
#[derive(Debug)]
pub enum TuiEvent {
    /// A request sent to the API worker has settled
    Api(ApiResponse),
}
