//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` on a local HTTP port (default 8000, or the first argument).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::process::{Command, Stdio};
    use std::{env, thread, time::Duration};

    let port = env::args().nth(1).unwrap_or_else(|| "8000".to_owned());
    if port.parse::<u16>().is_err() {
        eprintln!("invalid port {port:?}");
        std::process::exit(2);
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the page may load a stale bundle.");
        }
    }

    println!("Serving the CRT demo at http://127.0.0.1:{port} …");
    let mut server = match Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            eprintln!("failed to start http server: {e}");
            std::process::exit(1);
        }
    };

    // Keep process alive while the server runs.
    loop {
        match server.try_wait() {
            Ok(Some(status)) => {
                eprintln!("http server exited: {status}");
                std::process::exit(status.code().unwrap_or(1));
            }
            Ok(None) => thread::sleep(Duration::from_secs(1)),
            Err(e) => {
                eprintln!("lost track of http server: {e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
