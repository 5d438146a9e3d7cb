use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;
use crate::domain::transport::Transport;

/// Ctrl-Q / Ctrl-C
pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('q' | 'c'))
}

/// Snapshot the proxy field for the request about to be sent
pub fn transport_for(app: &App) -> Transport {
    let transport = Transport::from_proxy_url(&app.config.proxy_url);
    if let Some(proxy) = transport.proxy_for_log() {
        tracing::info!(%proxy, "Proxy configured");
    }
    transport
}
