//! Connect to a MirrorLink server and launch an application
//!
//! With a description location the server is described directly; without
//! one the network is searched over SSDP and the first server is used.
//!
//! Run with:
//!   cargo run -p mirrorlink-sdk --example launch_app -- <app-id> [<ip> <port> <path>]

use std::time::Duration;

use mirrorlink_sdk::{logging, result_code, ssdp, ClientConfig, MirrorLinkClient, SdkError};

fn parse_app_id(arg: &str) -> Result<u32, SdkError> {
    let parsed = match arg.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => arg.parse(),
    };
    parsed.map_err(|_| SdkError::ConfigError(format!("'{}' is not an application id", arg)))
}

fn main() -> Result<(), SdkError> {
    logging::init_logging_from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(app_id) = args.first() else {
        println!("usage: launch_app <app-id> [<ip> <port> <path>]");
        return Ok(());
    };
    let app_id = parse_app_id(app_id)?;

    let config = ClientConfig::load()?;
    let mut client = MirrorLinkClient::with_config(config);

    let (ip, port, path) = match &args[1..] {
        [ip, port, path] => {
            let port = port
                .parse()
                .map_err(|_| SdkError::ConfigError(format!("'{}' is not a port", port)))?;
            (ip.clone(), port, path.clone())
        }
        _ => {
            println!("Searching for MirrorLink servers...");
            let Some(location) = ssdp::search(Duration::from_secs(3))?.into_iter().next() else {
                println!("No MirrorLink server answered");
                return Ok(());
            };
            (location.host, location.port, location.path)
        }
    };

    let server = client.start(&ip, port, &path)?;
    println!("Connected to {} ({})", server.friendly_name().unwrap_or("unnamed"), server.uuid());

    let profile = client.set_client_profile();
    println!("SetClientProfile -> {}", result_code(&profile));

    let launch = client.launch(app_id);
    println!("LaunchApplication 0x{:08x} -> {}", app_id, result_code(&launch));

    client.stop();
    Ok(())
}
