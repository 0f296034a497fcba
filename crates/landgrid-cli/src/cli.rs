//! Command-line arguments.

use clap::{Parser, Subcommand};
use landgrid_spiral::{Assignment, Error, GeometryKind, LandCoord, RingGeometry, TokenId, WalkConfig};

/// Mint land coordinates from a square spiral.
///
/// Origin and geometry default to LANDGRID_ORIGIN / LANDGRID_GEOMETRY, then
/// to (500, 500) and the even-square rings.
#[derive(Debug, Parser)]
#[command(name = "landgrid", version, about)]
pub struct Cli {
    /// Spiral centre as "x,y"
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub origin: Option<LandCoord>,

    /// Ring geometry: "even" or "odd"
    #[arg(long, global = true)]
    pub geometry: Option<GeometryKind>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mint tokens and print their coordinates
    Mint {
        /// Number of tokens to mint
        #[arg(allow_hyphen_values = true)]
        count: String,

        /// Print JSON lines instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the coordinate a token id receives
    Lookup {
        token_id: u64,
    },

    /// Print size and cumulative token count of the first layers
    Layers {
        count: u64,
    },
}

impl Cli {
    /// Apply command-line overrides on top of `base`, then validate.
    pub fn walk_config(&self, base: WalkConfig) -> landgrid_spiral::Result<WalkConfig> {
        let mut config = base;
        if let Some(origin) = self.origin {
            config = config.with_origin(origin);
        }
        if let Some(geometry) = self.geometry {
            config = config.with_geometry(geometry);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Where `token_id` lands under `config`, computed without minting.
pub fn lookup(config: &WalkConfig, token_id: u64) -> landgrid_spiral::Result<Assignment> {
    let token_id = TokenId(token_id);
    if token_id.value() == 0 {
        return Err(Error::NotFound(token_id));
    }
    config
        .geometry
        .position_of(token_id, config.origin)
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "token {token_id} falls off the grid around {}",
                config.origin
            ))
        })
}

/// Reject layer counts whose cumulative token total overflows `u64`.
pub fn check_layer_count(geometry: GeometryKind, count: u64) -> landgrid_spiral::Result<u64> {
    geometry.tokens_through_layer(count).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "{count} {geometry} layers hold more than {} tokens",
            u64::MAX
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mint_with_overrides() {
        let cli = Cli::try_parse_from([
            "landgrid", "--origin", "-3,4", "--geometry", "odd", "mint", "12", "--json",
        ])
        .unwrap();

        assert_eq!(cli.origin, Some(LandCoord::new(-3, 4)));
        assert_eq!(cli.geometry, Some(GeometryKind::OddSquare));
        match cli.command {
            Command::Mint { count, json } => {
                assert_eq!(count, "12");
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn negative_count_reaches_validation() {
        let cli = Cli::try_parse_from(["landgrid", "mint", "-5"]).unwrap();
        match cli.command {
            Command::Mint { count, .. } => {
                assert!(landgrid_spiral::parse_batch_count(&count).is_err())
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_geometry_is_a_usage_error() {
        assert!(Cli::try_parse_from(["landgrid", "--geometry", "hex", "layers", "3"]).is_err());
    }

    #[test]
    fn flags_override_base_config() {
        let cli = Cli::try_parse_from(["landgrid", "--geometry", "odd", "layers", "3"]).unwrap();
        let config = cli.walk_config(WalkConfig::default()).unwrap();

        assert_eq!(config.origin, LandCoord::new(500, 500));
        assert_eq!(config.geometry, GeometryKind::OddSquare);
    }

    #[test]
    fn origin_at_i64_limit_is_rejected() {
        let edge = format!("{},0", i64::MAX);
        let cli =
            Cli::try_parse_from(["landgrid", "--origin", edge.as_str(), "mint", "6"]).unwrap();

        assert!(matches!(
            cli.walk_config(WalkConfig::default()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn lookup_matches_minting() {
        for geometry in [GeometryKind::EvenSquare, GeometryKind::OddSquare] {
            let config = WalkConfig::default().with_geometry(geometry);
            let mut walk = landgrid_spiral::SpiralWalk::from_config(&config).unwrap();

            for minted in walk.mint_batch(500).unwrap() {
                assert_eq!(lookup(&config, minted.token_id.value()).unwrap(), minted);
            }
        }
    }

    #[test]
    fn lookup_reaches_the_last_token_id() {
        let config = WalkConfig::default();
        let last = lookup(&config, u64::MAX).unwrap();

        assert_eq!(last.token_id, TokenId(u64::MAX));
        assert_eq!(last.layer, 1 << 31);
        assert!(matches!(lookup(&config, 0), Err(Error::NotFound(TokenId(0)))));
    }

    #[test]
    fn layer_count_must_fit_token_ids() {
        assert_eq!(check_layer_count(GeometryKind::EvenSquare, 3).unwrap(), 36);
        assert_eq!(
            check_layer_count(GeometryKind::EvenSquare, 1 << 30).unwrap(),
            1 << 62
        );
        assert!(check_layer_count(GeometryKind::EvenSquare, u64::MAX).is_err());
        assert!(check_layer_count(GeometryKind::OddSquare, 1 << 32).is_err());
    }
}
