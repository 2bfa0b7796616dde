use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use bitvec::prelude::*;

use crate::utils::solve_failed;

const LITERAL_TYPE: u64 = 4;
const MAX_LITERAL_GROUPS: usize = 16;
const MAX_NESTING: usize = 64;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Packet Decoder")]
#[aoc(year = 2021, day = 16, tags = ["2021"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Sum,
    Product,
    Minimum,
    Maximum,
    GreaterThan,
    LessThan,
    EqualTo,
}

impl Operator {
    fn from_type_id(type_id: u64) -> Option<Self> {
        Some(match type_id {
            0 => Operator::Sum,
            1 => Operator::Product,
            2 => Operator::Minimum,
            3 => Operator::Maximum,
            5 => Operator::GreaterThan,
            6 => Operator::LessThan,
            7 => Operator::EqualTo,
            _ => return None,
        })
    }

    fn is_comparison(self) -> bool {
        matches!(self, Operator::GreaterThan | Operator::LessThan | Operator::EqualTo)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload {
    Literal(u64),
    Operator(Operator, Vec<Packet>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    version: u8,
    payload: Payload,
}

impl Packet {
    fn version_sum(&self) -> u64 {
        let nested = match &self.payload {
            Payload::Literal(_) => 0,
            Payload::Operator(_, children) => children.iter().map(Packet::version_sum).sum(),
        };
        u64::from(self.version) + nested
    }

    /// Evaluates the expression tree. `None` means a sum or product overflowed.
    fn evaluate(&self) -> Option<u64> {
        let (operator, children) = match &self.payload {
            Payload::Literal(value) => return Some(*value),
            Payload::Operator(operator, children) => (*operator, children),
        };
        let values = children.iter().map(Packet::evaluate).collect::<Option<Vec<_>>>()?;
        match (operator, values.as_slice()) {
            (Operator::Sum, _) => values.iter().try_fold(0u64, |acc, &v| acc.checked_add(v)),
            (Operator::Product, _) => values.iter().try_fold(1u64, |acc, &v| acc.checked_mul(v)),
            (Operator::Minimum, _) => values.iter().copied().min(),
            (Operator::Maximum, _) => values.iter().copied().max(),
            (Operator::GreaterThan, &[a, b]) => Some(u64::from(a > b)),
            (Operator::LessThan, &[a, b]) => Some(u64::from(a < b)),
            (Operator::EqualTo, &[a, b]) => Some(u64::from(a == b)),
            // comparison arity is checked while parsing
            _ => None,
        }
    }
}

/// Cursor over the transmission bits, most significant bit first.
struct BitReader<'b> {
    bits: &'b BitSlice<u8, Msb0>,
    pos: usize,
}

impl<'b> BitReader<'b> {
    fn new(bits: &'b BitSlice<u8, Msb0>) -> Self {
        Self { bits, pos: 0 }
    }

    fn read(&mut self, width: usize) -> Result<u64, ParseError> {
        let end = self.pos + width;
        let field = self.bits.get(self.pos..end).ok_or_else(|| {
            ParseError::InvalidFormat(format!("transmission ends inside a packet at bit {}", self.pos))
        })?;
        self.pos = end;
        Ok(field.load_be::<u64>())
    }

    fn packet(&mut self, depth: usize) -> Result<Packet, ParseError> {
        if depth > MAX_NESTING {
            return Err(ParseError::InvalidFormat(format!(
                "packets nested deeper than {} levels",
                MAX_NESTING
            )));
        }
        let version = self.read(3)? as u8;
        let type_id = self.read(3)?;
        if type_id == LITERAL_TYPE {
            return Ok(Packet {
                version,
                payload: Payload::Literal(self.literal()?),
            });
        }

        let operator = Operator::from_type_id(type_id)
            .ok_or_else(|| ParseError::InvalidFormat(format!("unknown packet type {}", type_id)))?;
        let children = self.sub_packets(depth + 1)?;
        let arity_ok = if operator.is_comparison() {
            children.len() == 2
        } else {
            !children.is_empty()
        };
        if !arity_ok {
            return Err(ParseError::InvalidFormat(format!(
                "{:?} packet has {} sub-packets",
                operator,
                children.len()
            )));
        }
        Ok(Packet {
            version,
            payload: Payload::Operator(operator, children),
        })
    }

    /// Groups of five bits: a continuation flag followed by four value bits.
    fn literal(&mut self) -> Result<u64, ParseError> {
        let mut value = 0;
        for _ in 0..MAX_LITERAL_GROUPS {
            let group = self.read(5)?;
            value = (value << 4) | (group & 0xF);
            if group & 0x10 == 0 {
                return Ok(value);
            }
        }
        Err(ParseError::InvalidFormat("literal value wider than 64 bits".into()))
    }

    fn sub_packets(&mut self, depth: usize) -> Result<Vec<Packet>, ParseError> {
        let mut children = Vec::new();
        if self.read(1)? == 0 {
            let length = self.read(15)? as usize;
            let end = self.pos + length;
            if end > self.bits.len() {
                return Err(ParseError::InvalidFormat(format!(
                    "sub-packets need {} bits past the end of the transmission",
                    end - self.bits.len()
                )));
            }
            while self.pos < end {
                children.push(self.packet(depth)?);
            }
            if self.pos != end {
                return Err(ParseError::InvalidFormat(format!(
                    "sub-packets overrun their declared length of {} bits",
                    length
                )));
            }
        } else {
            let count = self.read(11)?;
            for _ in 0..count {
                children.push(self.packet(depth)?);
            }
        }
        Ok(children)
    }
}

fn hex_to_bits(hex: &str) -> Result<BitVec<u8, Msb0>, ParseError> {
    let mut bits = BitVec::with_capacity(hex.len() * 4);
    for ch in hex.chars() {
        let nibble = ch
            .to_digit(16)
            .ok_or_else(|| ParseError::InvalidFormat(format!("{:?} is not a hex digit", ch)))?
            as u8;
        bits.extend_from_bitslice(&nibble.view_bits::<Msb0>()[4..]);
    }
    Ok(bits)
}

impl AocParser for Solver {
    type SharedData<'a> = Packet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let hex = input.trim();
        if hex.is_empty() {
            return Err(ParseError::MissingData("empty transmission".into()));
        }
        let bits = hex_to_bits(hex)?;
        let mut reader = BitReader::new(&bits);
        let packet = reader.packet(0)?;
        if bits[reader.pos..].any() {
            return Err(ParseError::InvalidFormat("non-zero bits after the outermost packet".into()));
        }
        Ok(packet)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.version_sum().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .evaluate()
            .map(|value| value.to_string())
            .ok_or_else(|| solve_failed("packet value overflows 64 bits"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_part;

    #[test]
    fn test_literal_packet() {
        let packet = Solver::parse("D2FE28").unwrap();
        assert_eq!(
            packet,
            Packet {
                version: 6,
                payload: Payload::Literal(2021)
            }
        );
    }

    #[test]
    fn test_operator_packets() {
        let by_length = Solver::parse("38006F45291200").unwrap();
        assert_eq!(by_length.version, 1);
        match by_length.payload {
            Payload::Operator(Operator::LessThan, children) => {
                let values: Vec<_> = children.iter().map(|c| c.evaluate().unwrap()).collect();
                assert_eq!(values, vec![10, 20]);
            }
            other => panic!("unexpected payload {other:?}"),
        }

        let by_count = Solver::parse("EE00D40C823060").unwrap();
        assert_eq!(by_count.version, 7);
        match by_count.payload {
            Payload::Operator(Operator::Maximum, children) => assert_eq!(children.len(), 3),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_version_sums() {
        for (hex, expected) in [
            ("8A004A801A8002F478", "16"),
            ("620080001611562C8802118E34", "12"),
            ("C0015000016115A2E0802F182340", "23"),
            ("A0016C880162017C3686B18A3D4780", "31"),
        ] {
            assert_eq!(solve_part::<Solver>(hex, 1), expected, "{hex}");
        }
    }

    #[test]
    fn test_evaluation() {
        for (hex, expected) in [
            ("C200B40A82", "3"),
            ("04005AC33890", "54"),
            ("880086C3E88112", "7"),
            ("CE00C43D881120", "9"),
            ("D8005AC2A8F0", "1"),
            ("F600BC2D8F", "0"),
            ("9C005AC2F8F0", "0"),
            ("9C0141080250320F1802104A08", "1"),
        ] {
            assert_eq!(solve_part::<Solver>(hex, 2), expected, "{hex}");
        }
    }

    #[test]
    fn test_rejects_truncated_and_invalid_input() {
        assert!(matches!(Solver::parse("D2"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("D2FE2G"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("D2FE28F"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse(" \n"), Err(ParseError::MissingData(_))));
    }

    /// Sum operators, each wrapping the next by sub-packet count, around a literal 1.
    fn nested_sums(levels: usize) -> String {
        let mut bits = "000000100000000001".repeat(levels);
        bits.push_str("00010000001");
        while bits.len() % 4 != 0 {
            bits.push('0');
        }
        bits.as_bytes()
            .chunks(4)
            .map(|nibble| {
                let value = nibble.iter().fold(0, |acc, &b| (acc << 1) | u32::from(b - b'0'));
                char::from_digit(value, 16).unwrap().to_ascii_uppercase()
            })
            .collect()
    }

    #[test]
    fn test_nesting_limit() {
        assert_eq!(solve_part::<Solver>(&nested_sums(3), 2), "1");
        assert_eq!(solve_part::<Solver>(&nested_sums(MAX_NESTING), 2), "1");
        assert!(matches!(
            Solver::parse(&nested_sums(MAX_NESTING + 1)),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
