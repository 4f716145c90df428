/* 3rd party libraries */
use clap::{Arg, ArgGroup, Command};
use std::fs;
use std::net::UdpSocket;
use std::process::{self, Command as Process};

/*
 * Standalone control utility: delivers the "fire" event to a running
 * elevator_sim process, addressed by PID or by process-name lookup. The
 * target is verified before delivery; any failure exits non-zero with a
 * diagnostic and never touches a running simulation.
 */

const APP_NAME: &str = "elevator_sim";
const DEFAULT_PORT: &str = "17878";
const EVENT: &str = "fire";

fn main() {
    let matches = Command::new("fire_response")
        .about("Deliver the fire event to a running elevator simulation")
        .arg(
            Arg::new("pid")
                .short('p')
                .long("pid")
                .takes_value(true)
                .value_name("PID")
                .help("Target the simulation process by PID"),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .takes_value(true)
                .value_name("PROCESS_NAME")
                .help("Target the simulation process by name lookup"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .takes_value(true)
                .value_name("PORT")
                .default_value(DEFAULT_PORT)
                .help("Control port the simulation listens on"),
        )
        .group(
            ArgGroup::new("target")
                .args(&["pid", "name"])
                .required(true),
        )
        .get_matches();

    let port: u16 = match matches.value_of("port").unwrap().parse() {
        Ok(port) => port,
        Err(_) => {
            eprintln!("Error: Invalid port provided.");
            process::exit(1);
        }
    };

    let pid = match matches.value_of("pid") {
        Some(pid_str) => resolve_by_pid(pid_str),
        None => resolve_by_name(matches.value_of("name").unwrap()),
    };

    deliver(port, pid);
    println!("Fire response event sent to PID {}.", pid);
}

/// Checks that the given PID exists and actually is the simulator.
fn resolve_by_pid(pid_str: &str) -> u32 {
    let pid: u32 = match pid_str.parse() {
        Ok(pid) if pid > 0 => pid,
        _ => {
            eprintln!("Error: Invalid PID provided.");
            process::exit(1);
        }
    };

    let comm = match fs::read_to_string(format!("/proc/{}/comm", pid)) {
        Ok(comm) => comm,
        Err(_) => {
            eprintln!("Error: No process with PID {}.", pid);
            process::exit(1);
        }
    };

    if comm.trim() != APP_NAME {
        eprintln!(
            "Error: PID {} is '{}', not a running {}.",
            pid,
            comm.trim(),
            APP_NAME
        );
        process::exit(1);
    }
    pid
}

/// Looks the simulator up by process name, as the announcement-less fallback.
fn resolve_by_name(process_name: &str) -> u32 {
    let output = match Process::new("pgrep").arg("-x").arg(process_name).output() {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: Failed to run pgrep: {}", e);
            process::exit(1);
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    match stdout.lines().next().and_then(|line| line.trim().parse().ok()) {
        Some(pid) => pid,
        None => {
            eprintln!("{} is not running or doesn't match expected patterns.", process_name);
            process::exit(1);
        }
    }
}

/// Sends the control datagram to the simulation's loopback control port.
fn deliver(port: u16, pid: u32) {
    let socket = match UdpSocket::bind("127.0.0.1:0") {
        Ok(socket) => socket,
        Err(e) => {
            eprintln!("Error: Failed to open control socket: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = socket.send_to(EVENT.as_bytes(), ("127.0.0.1", port)) {
        eprintln!("Failed to send control event to PID {}: {}", pid, e);
        process::exit(1);
    }
}
