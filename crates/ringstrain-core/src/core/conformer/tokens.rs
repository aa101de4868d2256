use crate::core::error::InvalidInput;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The conformation of a single ligand, encoded as the rotation directions of
/// its two internal C–C bonds.
///
/// Each letter is a sign: `R` maps to +1 and `L` to −1. The first letter
/// drives the bond on the entry side of the ligand, the second the bond on
/// the exit side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LigandType {
    RR,
    RL,
    LR,
    LL,
}

impl LigandType {
    /// All four ligand conformations, in the canonical enumeration order.
    pub const ALL: [LigandType; 4] = [
        LigandType::RR,
        LigandType::RL,
        LigandType::LR,
        LigandType::LL,
    ];

    /// The rotation-direction signs `(j, k)` of the two C–C bonds.
    pub fn signs(&self) -> (f64, f64) {
        match self {
            LigandType::RR => (1.0, 1.0),
            LigandType::RL => (1.0, -1.0),
            LigandType::LR => (-1.0, 1.0),
            LigandType::LL => (-1.0, -1.0),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LigandType::RR => "RR",
            LigandType::RL => "RL",
            LigandType::LR => "LR",
            LigandType::LL => "LL",
        }
    }
}

impl FromStr for LigandType {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RR" => Ok(LigandType::RR),
            "RL" => Ok(LigandType::RL),
            "LR" => Ok(LigandType::LR),
            "LL" => Ok(LigandType::LL),
            _ => Err(InvalidInput::LigandToken(s.to_string())),
        }
    }
}

impl fmt::Display for LigandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The relative orientation of two ligands at a metal-center connection.
///
/// Each letter is a sign: `F` (front) maps to +1 and `B` (back) to −1. Only
/// the first letter enters the joining rotation directly; the pair as a whole
/// selects the 180° orientation-normalization flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConnectionType {
    FF,
    FB,
    BF,
    BB,
}

impl ConnectionType {
    /// All four connection orientations, in the canonical enumeration order.
    pub const ALL: [ConnectionType; 4] = [
        ConnectionType::FF,
        ConnectionType::FB,
        ConnectionType::BF,
        ConnectionType::BB,
    ];

    /// The orientation sign `l` of the first letter.
    pub fn first_sign(&self) -> f64 {
        match self {
            ConnectionType::FF | ConnectionType::FB => 1.0,
            ConnectionType::BF | ConnectionType::BB => -1.0,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ConnectionType::FF => "FF",
            ConnectionType::FB => "FB",
            ConnectionType::BF => "BF",
            ConnectionType::BB => "BB",
        }
    }
}

impl FromStr for ConnectionType {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FF" => Ok(ConnectionType::FF),
            "FB" => Ok(ConnectionType::FB),
            "BF" => Ok(ConnectionType::BF),
            "BB" => Ok(ConnectionType::BB),
            _ => Err(InvalidInput::ConnectionToken(s.to_string())),
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_all_ligand_tokens() {
        assert_eq!(LigandType::from_str("RR"), Ok(LigandType::RR));
        assert_eq!(LigandType::from_str("RL"), Ok(LigandType::RL));
        assert_eq!(LigandType::from_str("LR"), Ok(LigandType::LR));
        assert_eq!(LigandType::from_str("LL"), Ok(LigandType::LL));
    }

    #[test]
    fn from_str_rejects_unknown_ligand_tokens() {
        assert_eq!(
            LigandType::from_str("RF"),
            Err(InvalidInput::LigandToken("RF".to_string()))
        );
        assert_eq!(
            LigandType::from_str("rr"),
            Err(InvalidInput::LigandToken("rr".to_string()))
        );
        assert_eq!(
            LigandType::from_str("R"),
            Err(InvalidInput::LigandToken("R".to_string()))
        );
    }

    #[test]
    fn from_str_parses_all_connection_tokens() {
        assert_eq!(ConnectionType::from_str("FF"), Ok(ConnectionType::FF));
        assert_eq!(ConnectionType::from_str("FB"), Ok(ConnectionType::FB));
        assert_eq!(ConnectionType::from_str("BF"), Ok(ConnectionType::BF));
        assert_eq!(ConnectionType::from_str("BB"), Ok(ConnectionType::BB));
    }

    #[test]
    fn from_str_rejects_unknown_connection_tokens() {
        assert_eq!(
            ConnectionType::from_str("FR"),
            Err(InvalidInput::ConnectionToken("FR".to_string()))
        );
        assert_eq!(
            ConnectionType::from_str("ff"),
            Err(InvalidInput::ConnectionToken("ff".to_string()))
        );
    }

    #[test]
    fn ligand_signs_map_r_to_plus_and_l_to_minus() {
        assert_eq!(LigandType::RR.signs(), (1.0, 1.0));
        assert_eq!(LigandType::RL.signs(), (1.0, -1.0));
        assert_eq!(LigandType::LR.signs(), (-1.0, 1.0));
        assert_eq!(LigandType::LL.signs(), (-1.0, -1.0));
    }

    #[test]
    fn connection_first_sign_maps_f_to_plus_and_b_to_minus() {
        assert_eq!(ConnectionType::FF.first_sign(), 1.0);
        assert_eq!(ConnectionType::FB.first_sign(), 1.0);
        assert_eq!(ConnectionType::BF.first_sign(), -1.0);
        assert_eq!(ConnectionType::BB.first_sign(), -1.0);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for lig in LigandType::ALL {
            assert_eq!(LigandType::from_str(&lig.to_string()), Ok(lig));
        }
        for con in ConnectionType::ALL {
            assert_eq!(ConnectionType::from_str(&con.to_string()), Ok(con));
        }
    }
}
