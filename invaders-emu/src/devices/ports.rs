//! Space Invaders port map.
//!
//! Inputs (`IN`):
//!
//! | Port | Bits |
//! |------|------|
//! | 0 | unused by the game, reads `0000_1110` |
//! | 1 | 0 coin, 1 P2 start, 2 P1 start, 3 always 1, 4 P1 fire, 5 P1 left, 6 P1 right |
//! | 2 | 0-1 ships (DIP), 2 tilt, 3 bonus at 1000 (DIP), 4 P2 fire, 5 P2 left, 6 P2 right, 7 hide coin info (DIP) |
//! | 3 | shift register result |
//!
//! Outputs (`OUT`):
//!
//! | Port | Function |
//! |------|----------|
//! | 2 | shift offset (bits 0-2) |
//! | 3 | sounds: 0 UFO, 1 shot, 2 player death, 3 invader death, 4 extra life |
//! | 4 | shift data |
//! | 5 | sounds: 0-3 fleet movement, 4 UFO hit |
//! | 6 | watchdog |
//!
//! Input bits are active-high: a pressed button reads as 1.

use tracing::{debug, trace};

use super::ShiftRegister;

/// Host-side handler for the 8080's `IN` and `OUT` instructions.
///
/// The CPU core never executes port I/O itself; the system reads the port
/// number from the instruction and calls into this trait.
pub trait PortHandler {
    /// Returns the byte `IN port` loads into the accumulator.
    fn input(&mut self, port: u8) -> u8;

    /// Receives the accumulator written by `OUT port`.
    fn output(&mut self, port: u8, value: u8);
}

/// Port 0 reads with these bits set on the real board.
const PORT0_FIXED: u8 = 0b0000_1110;

/// Port 1 bit 3 is tied high.
const PORT1_FIXED: u8 = 0b0000_1000;

/// A physical control on the cabinet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Coin,
    P1Start,
    P2Start,
    P1Fire,
    P1Left,
    P1Right,
    P2Fire,
    P2Left,
    P2Right,
    Tilt,
}

impl Button {
    /// Every button, in port bit order.
    pub const ALL: [Button; 10] = [
        Button::Coin,
        Button::P2Start,
        Button::P1Start,
        Button::P1Fire,
        Button::P1Left,
        Button::P1Right,
        Button::Tilt,
        Button::P2Fire,
        Button::P2Left,
        Button::P2Right,
    ];

    /// The input port and bit mask this button drives.
    pub const fn port_bit(self) -> (u8, u8) {
        match self {
            Button::Coin => (1, 0x01),
            Button::P2Start => (1, 0x02),
            Button::P1Start => (1, 0x04),
            Button::P1Fire => (1, 0x10),
            Button::P1Left => (1, 0x20),
            Button::P1Right => (1, 0x40),
            Button::Tilt => (2, 0x04),
            Button::P2Fire => (2, 0x10),
            Button::P2Left => (2, 0x20),
            Button::P2Right => (2, 0x40),
        }
    }
}

/// Maps a browser `KeyboardEvent.code` to a cabinet button.
///
/// Player one uses the arrow keys and space; player two uses A/D/W.
pub fn button_for_key(code: &str) -> Option<Button> {
    let button = match code {
        "KeyC" => Button::Coin,
        "Digit1" => Button::P1Start,
        "Digit2" => Button::P2Start,
        "Space" => Button::P1Fire,
        "ArrowLeft" => Button::P1Left,
        "ArrowRight" => Button::P1Right,
        "KeyW" => Button::P2Fire,
        "KeyA" => Button::P2Left,
        "KeyD" => Button::P2Right,
        "KeyT" => Button::Tilt,
        _ => return None,
    };
    Some(button)
}

/// Operator DIP switch settings, read through port 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DipSwitches {
    /// Ships per game, 3 to 6.
    pub lives: u8,

    /// Award the extra ship at 1000 points instead of 1500.
    pub bonus_at_1000: bool,

    /// Hide the coin information on the attract screen.
    pub coin_info_hidden: bool,
}

impl Default for DipSwitches {
    fn default() -> Self {
        Self {
            lives: 3,
            bonus_at_1000: false,
            coin_info_hidden: false,
        }
    }
}

impl DipSwitches {
    /// Port 2 bits contributed by the switches. Out-of-range `lives` clamps
    /// to 3..=6.
    pub fn port2_bits(&self) -> u8 {
        let mut bits = self.lives.clamp(3, 6) - 3;
        if self.bonus_at_1000 {
            bits |= 0x08;
        }
        if self.coin_info_hidden {
            bits |= 0x80;
        }
        bits
    }
}

/// A sound effect triggered by a rising edge on a sound latch bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Ufo,
    Shot,
    PlayerDeath,
    InvaderDeath,
    ExtraLife,
    Fleet1,
    Fleet2,
    Fleet3,
    Fleet4,
    UfoHit,
}

impl SoundEvent {
    /// Short lowercase name, as handed to JavaScript.
    pub const fn name(self) -> &'static str {
        match self {
            SoundEvent::Ufo => "ufo",
            SoundEvent::Shot => "shot",
            SoundEvent::PlayerDeath => "player_death",
            SoundEvent::InvaderDeath => "invader_death",
            SoundEvent::ExtraLife => "extra_life",
            SoundEvent::Fleet1 => "fleet1",
            SoundEvent::Fleet2 => "fleet2",
            SoundEvent::Fleet3 => "fleet3",
            SoundEvent::Fleet4 => "fleet4",
            SoundEvent::UfoHit => "ufo_hit",
        }
    }
}

const PORT3_SOUNDS: [(u8, SoundEvent); 5] = [
    (0x01, SoundEvent::Ufo),
    (0x02, SoundEvent::Shot),
    (0x04, SoundEvent::PlayerDeath),
    (0x08, SoundEvent::InvaderDeath),
    (0x10, SoundEvent::ExtraLife),
];

const PORT5_SOUNDS: [(u8, SoundEvent); 5] = [
    (0x01, SoundEvent::Fleet1),
    (0x02, SoundEvent::Fleet2),
    (0x04, SoundEvent::Fleet3),
    (0x08, SoundEvent::Fleet4),
    (0x10, SoundEvent::UfoHit),
];

/// The Space Invaders board's port hardware.
#[derive(Debug, Clone, Default)]
pub struct InvadersPorts {
    shift: ShiftRegister,
    dip_switches: DipSwitches,

    /// Pressed-button bits for port 1 and port 2.
    port1: u8,
    port2: u8,

    /// Last values written to the sound ports.
    sound_latch3: u8,
    sound_latch5: u8,

    /// Rising edges not yet drained by the mixer.
    pending_sounds: Vec<SoundEvent>,

    watchdog_writes: u64,
}

impl InvadersPorts {
    /// Creates the port hardware with nothing pressed.
    pub fn new(dip_switches: DipSwitches) -> Self {
        Self {
            dip_switches,
            ..Self::default()
        }
    }

    pub fn press(&mut self, button: Button) {
        match button.port_bit() {
            (1, mask) => self.port1 |= mask,
            (_, mask) => self.port2 |= mask,
        }
    }

    pub fn release(&mut self, button: Button) {
        match button.port_bit() {
            (1, mask) => self.port1 &= !mask,
            (_, mask) => self.port2 &= !mask,
        }
    }

    /// Releases every button.
    pub fn release_all(&mut self) {
        self.port1 = 0;
        self.port2 = 0;
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        match button.port_bit() {
            (1, mask) => self.port1 & mask != 0,
            (_, mask) => self.port2 & mask != 0,
        }
    }

    pub fn dip_switches(&self) -> DipSwitches {
        self.dip_switches
    }

    pub fn set_dip_switches(&mut self, dip_switches: DipSwitches) {
        self.dip_switches = dip_switches;
    }

    pub fn shift_register(&self) -> &ShiftRegister {
        &self.shift
    }

    /// Current contents of the port 3 and port 5 sound latches.
    pub fn sound_latches(&self) -> (u8, u8) {
        (self.sound_latch3, self.sound_latch5)
    }

    /// Drains the sounds started since the last call, oldest first.
    pub fn take_sound_events(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.pending_sounds)
    }

    /// Number of watchdog writes seen.
    pub fn watchdog_writes(&self) -> u64 {
        self.watchdog_writes
    }

    fn latch_sounds(&mut self, previous: u8, value: u8, table: &[(u8, SoundEvent)]) {
        let rising = value & !previous;
        for &(mask, event) in table {
            if rising & mask != 0 {
                trace!(?event, "sound started");
                self.pending_sounds.push(event);
            }
        }
    }
}

impl PortHandler for InvadersPorts {
    fn input(&mut self, port: u8) -> u8 {
        match port {
            0 => PORT0_FIXED,
            1 => PORT1_FIXED | self.port1,
            2 => self.dip_switches.port2_bits() | self.port2,
            3 => self.shift.result(),
            _ => {
                debug!(port, "read from unmapped port");
                0
            }
        }
    }

    fn output(&mut self, port: u8, value: u8) {
        match port {
            2 => self.shift.set_offset(value),
            3 => {
                let previous = std::mem::replace(&mut self.sound_latch3, value);
                self.latch_sounds(previous, value, &PORT3_SOUNDS);
            }
            4 => self.shift.write_data(value),
            5 => {
                let previous = std::mem::replace(&mut self.sound_latch5, value);
                self.latch_sounds(previous, value, &PORT5_SOUNDS);
            }
            6 => self.watchdog_writes += 1,
            _ => debug!(port, value, "write to unmapped port"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port0_and_idle_port1() {
        let mut ports = InvadersPorts::default();

        assert_eq!(ports.input(0), 0b0000_1110);
        assert_eq!(ports.input(1), 0b0000_1000);
    }

    #[test]
    fn test_press_and_release() {
        let mut ports = InvadersPorts::default();

        ports.press(Button::Coin);
        ports.press(Button::P1Left);
        assert_eq!(ports.input(1), 0x08 | 0x01 | 0x20);

        ports.release(Button::Coin);
        assert_eq!(ports.input(1), 0x08 | 0x20);
        assert!(ports.is_pressed(Button::P1Left));
        assert!(!ports.is_pressed(Button::Coin));
    }

    #[test]
    fn test_release_all_clears_both_ports() {
        let mut ports = InvadersPorts::default();
        ports.press(Button::P1Start);
        ports.press(Button::P2Right);

        ports.release_all();

        assert_eq!(ports.input(1), 0x08);
        assert_eq!(ports.input(2), 0x00);
    }

    #[test]
    fn test_dip_switches_can_change_at_runtime() {
        let mut ports = InvadersPorts::new(DipSwitches::default());
        assert_eq!(ports.dip_switches(), DipSwitches::default());

        let four_ships = DipSwitches {
            lives: 4,
            ..DipSwitches::default()
        };
        ports.set_dip_switches(four_ships);

        assert_eq!(ports.dip_switches().lives, 4);
        assert_eq!(ports.input(2), 0x01);
    }

    #[test]
    fn test_player_two_and_tilt_on_port2() {
        let mut ports = InvadersPorts::default();

        ports.press(Button::P2Fire);
        ports.press(Button::Tilt);

        assert_eq!(ports.input(2), 0x10 | 0x04);
        assert_eq!(ports.input(1), 0x08);
    }

    #[test]
    fn test_dip_switch_bits() {
        let dips = DipSwitches {
            lives: 6,
            bonus_at_1000: true,
            coin_info_hidden: true,
        };
        assert_eq!(dips.port2_bits(), 0b1000_1011);

        let clamped = DipSwitches {
            lives: 9,
            ..DipSwitches::default()
        };
        assert_eq!(clamped.port2_bits(), 0b0000_0011);
        assert_eq!(DipSwitches::default().port2_bits(), 0);
    }

    #[test]
    fn test_shift_register_through_ports() {
        let mut ports = InvadersPorts::default();

        ports.output(4, 0xFF);
        ports.output(4, 0x00);
        ports.output(2, 2);

        // 0x00FF >> 6 = 0x03
        assert_eq!(ports.input(3), 0x03);
    }

    #[test]
    fn test_sound_rising_edges() {
        let mut ports = InvadersPorts::default();

        ports.output(3, 0x02);
        ports.output(3, 0x02); // held, no new event
        ports.output(3, 0x0A);
        ports.output(5, 0x11);

        assert_eq!(
            ports.take_sound_events(),
            vec![
                SoundEvent::Shot,
                SoundEvent::InvaderDeath,
                SoundEvent::Fleet1,
                SoundEvent::UfoHit
            ]
        );
        assert!(ports.take_sound_events().is_empty());
        assert_eq!(ports.sound_latches(), (0x0A, 0x11));
    }

    #[test]
    fn test_watchdog_and_unmapped_ports() {
        let mut ports = InvadersPorts::default();

        ports.output(6, 0x00);
        ports.output(6, 0x01);
        ports.output(7, 0xFF);

        assert_eq!(ports.watchdog_writes(), 2);
        assert_eq!(ports.input(7), 0x00);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(button_for_key("KeyC"), Some(Button::Coin));
        assert_eq!(button_for_key("ArrowRight"), Some(Button::P1Right));
        assert_eq!(button_for_key("KeyZ"), None);
    }

    #[test]
    fn test_every_button_has_a_distinct_bit() {
        let mut ports = InvadersPorts::default();

        for button in Button::ALL {
            let before = (ports.input(1), ports.input(2));
            ports.press(button);
            assert_ne!(before, (ports.input(1), ports.input(2)), "{:?}", button);
        }
    }
}
