//! Drive the console against a live mock server, one typed line at a time.

use hotel_console::{render, Console, Flow, Line};
use hotel_core::{GatewayConfig, Session, UreqTransport};

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/api")
}

fn run(console: &mut Console<UreqTransport>, input: &str) -> String {
    let line = Line::parse_line(input).unwrap();
    assert_eq!(console.execute(line.command), Flow::Continue);
    render(&console.session().display())
}

#[test]
fn client_commands_show_payloads() {
    let mut console = Console::new(Session::from_config(&GatewayConfig::new(start_server())));

    let shown = run(&mut console, "create-client Dupont Jean jean@x.com 0600000000");
    assert!(shown.starts_with("Client created\n"), "{shown}");
    assert!(shown.contains("\"id\": 1"), "{shown}");

    let shown = run(&mut console, "list-clients");
    assert!(shown.starts_with("Client list retrieved\n"), "{shown}");
    assert!(shown.contains("\"nom\": \"Dupont\""), "{shown}");
}

#[test]
fn reservation_for_unknown_client_shows_404() {
    let mut console = Console::new(Session::from_config(&GatewayConfig::new(start_server())));

    let shown = run(&mut console, "create-reservation 3 1 2025-07-01 2025-07-05");
    assert_eq!(shown, "Error\nError 404: \"\"");

    let shown = run(&mut console, "list-reservations");
    assert_eq!(shown, "Reservation list retrieved\n[]");
}

#[test]
fn get_then_delete_reuses_id() {
    let mut console = Console::new(Session::from_config(&GatewayConfig::new(start_server())));

    let shown = run(&mut console, "get-reservation 999");
    assert!(shown.starts_with("Error\nError 404"), "{shown}");

    // The remembered id is reused and the server's 404 surfaces again.
    let shown = run(&mut console, "delete-reservation");
    assert!(shown.starts_with("Error\nError 404"), "{shown}");
    assert_eq!(console.reservation_id(), "999");
}
