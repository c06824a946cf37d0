//! Startup banners for the service and the client.

use crate::config::Settings;
use crate::consts::{API_VERSION, AUTHOR, HOMEPAGE, REPO};

const ART: &str = r#"
   ╔═══════════════════════════════════════╗
   ║               L E X I S               ║
   ║     two engines, one piece of text    ║
   ╚═══════════════════════════════════════╝
"#;

/// Print the banner shown before the service binds.
pub fn print_server_banner(settings: &Settings) {
    println!(
        r#"{ART}
   version   {} (api {})
   by        {}
   home      {}
   repo      {}
   listen    {}
   data      {}
   body max  {} bytes
"#,
        env!("CARGO_PKG_VERSION"),
        API_VERSION,
        AUTHOR,
        HOMEPAGE,
        REPO,
        settings.bind_address(),
        settings.resources.data_dir.display(),
        settings.server.max_body_bytes,
    );
}

/// Print the banner shown when the interactive client starts.
pub fn print_client_banner(settings: &Settings) {
    println!(
        r#"{ART}
   version   {}
   service   {}
   timeout   {}s
"#,
        env!("CARGO_PKG_VERSION"),
        settings.client.url,
        settings.client.timeout_secs,
    );
}

pub fn print_farewell() {
    println!("goodbye.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners_do_not_panic() {
        let settings = Settings::default();
        print_server_banner(&settings);
        print_client_banner(&settings);
        print_farewell();
    }
}
