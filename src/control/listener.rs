use std::net::UdpSocket;
use std::str;

use crate::config::ControlConfig;
use crate::shared::ControlEvent;
use crossbeam_channel as cbc;

/**
 * Ingests external control events for a running simulation.
 *
 * The listener binds a loopback UDP socket and translates the plain-text
 * datagrams `"breakdown"` and `"fire"` (sent by the standalone control
 * utilities) into `ControlEvent` messages on a crossbeam channel. The clock
 * drains that channel at the start of every tick, so an event is never
 * observed while the fleet is mid-mutation.
 *
 * # Fields
 * - `socket`:       Bound UDP control socket.
 * - `control_tx`:   Sender forwarding parsed events to the clock.
 */
pub struct ControlListener {
    socket: UdpSocket,
    control_tx: cbc::Sender<ControlEvent>,
}

impl ControlListener {
    pub fn new(
        config: &ControlConfig,
        control_tx: cbc::Sender<ControlEvent>,
    ) -> std::io::Result<ControlListener> {
        let socket = UdpSocket::bind((config.bind_address.as_str(), config.port))?;
        log::info!("Control listener bound on {}:{}", config.bind_address, config.port);

        Ok(ControlListener { socket, control_tx })
    }

    pub fn run(self) {
        let mut buf = [0u8; 64];
        loop {
            let (len, peer) = match self.socket.recv_from(&mut buf) {
                Ok(received) => received,
                Err(e) => {
                    log::warn!("Error receiving control datagram: {}", e);
                    continue;
                }
            };

            let event = match parse_event(&buf[..len]) {
                Some(event) => event,
                None => {
                    log::warn!("Unknown control datagram from {}, ignoring", peer);
                    continue;
                }
            };

            log::info!("Control event {:?} received from {}", event, peer);
            if self.control_tx.send(event).is_err() {
                // Clock is gone, nothing left to control.
                return;
            }
        }
    }
}

fn parse_event(payload: &[u8]) -> Option<ControlEvent> {
    match str::from_utf8(payload).ok()?.trim() {
        "breakdown" => Some(ControlEvent::Breakdown),
        "fire" => Some(ControlEvent::Fire),
        _ => None,
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
