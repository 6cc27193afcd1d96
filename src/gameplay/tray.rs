use serde::Deserialize;
use serde::Serialize;

/// dealer and vulnerability, fixed once at round creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tray {
    dealer: usize,
    vul: [bool; 2],
}

impl Tray {
    pub fn new(dealer: usize, vul: [bool; 2]) -> Self {
        assert!(dealer < crate::N);
        Self { dealer, vul }
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    /// per-pair flags, NS then EW
    pub fn vul(&self) -> [bool; 2] {
        self.vul
    }
}

/// u8 injection from the duplicate board number 1..=16:
/// the dealer rotates N E S W and vulnerability follows the standard cycle,
/// shifting one seat pair every lap of four boards.
impl From<u8> for Tray {
    fn from(board: u8) -> Self {
        assert!((1..=16).contains(&board), "Invalid board number: {}", board);
        let n = board - 1;
        let dealer = (n % 4) as usize;
        let vul = match (n + n / 4) % 4 {
            0 => [false, false],
            1 => [true, false],
            2 => [false, true],
            _ => [true, true],
        };
        Self { dealer, vul }
    }
}

impl std::fmt::Display for Tray {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let vul = match self.vul {
            [false, false] => "none",
            [true, false] => "NS",
            [false, true] => "EW",
            [true, true] => "both",
        };
        write!(f, "dealer P{} vul {}", self.dealer, vul)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_cycle() {
        assert_eq!(Tray::from(1), Tray::new(0, [false, false]));
        assert_eq!(Tray::from(2), Tray::new(1, [true, false]));
        assert_eq!(Tray::from(5), Tray::new(0, [true, false]));
        assert_eq!(Tray::from(8), Tray::new(3, [false, false]));
        assert_eq!(Tray::from(13), Tray::new(0, [true, true]));
        assert_eq!(Tray::from(16), Tray::new(3, [false, true]));
    }
}
