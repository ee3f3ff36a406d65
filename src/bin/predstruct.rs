use clap::{App, AppSettings, Arg, ArgMatches};

use std::convert::TryFrom;
use std::io::{self, Write};

use predstruct::api::*;
use predstruct::PredictionStructureGroup;

struct CLISettings {
    pub enc: EncoderConfig,
    pub all: bool,
    pub verbose: bool,
}

pub trait MatchGet {
    fn value_of_int(&self, name: &str) -> Option<io::Result<usize>>;
}

impl MatchGet for ArgMatches<'_> {
    fn value_of_int(&self, name: &str) -> Option<io::Result<usize>> {
        self.value_of(name).map(|v| {
            v.parse().map_err(|e: std::num::ParseIntError| {
                io::Error::new(io::ErrorKind::InvalidInput, e)
            })
        })
    }
}

fn invalid_input(err: PredError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

fn parse_config(matches: &ArgMatches<'_>) -> io::Result<EncoderConfig> {
    let mut cfg = EncoderConfig::default();

    if let Some(levels) = matches.value_of_int("LEVELS") {
        cfg.hierarchical_levels = levels?;
    }
    if let Some(pred) = matches.value_of_int("PRED_STRUCTURE") {
        let pred = u8::try_from(pred?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        cfg = cfg
            .with_pred_structure_index(pred)
            .map_err(invalid_input)?;
    }
    if let Some(refs) = matches.value_of_int("REFS") {
        cfg.reference_count = refs?;
    }
    cfg.base_layer_switch_mode = matches.is_present("BASE_LAYER_SWITCH");

    cfg.validate().map_err(invalid_input)?;

    Ok(cfg)
}

fn parse_cli() -> io::Result<CLISettings> {
    let app = App::new("predstruct")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prediction structure planner")
        .setting(AppSettings::DeriveDisplayOrder)
        .arg(
            Arg::with_name("LEVELS")
                .help("hierarchical levels (0-5), period = 2^levels")
                .short("l")
                .long("levels")
                .takes_value(true)
                .default_value("3"),
        )
        .arg(
            Arg::with_name("PRED_STRUCTURE")
                .help("prediction structure (0: low delay P, 1: low delay B, 2: random access)")
                .short("p")
                .long("pred-struct")
                .takes_value(true)
                .default_value("2"),
        )
        .arg(
            Arg::with_name("REFS")
                .help("reference count (1-4)")
                .short("r")
                .long("refs")
                .takes_value(true)
                .default_value("4"),
        )
        .arg(
            Arg::with_name("BASE_LAYER_SWITCH")
                .help("empty List1 of temporal layer 0 pictures")
                .long("base-layer-switch"),
        )
        .arg(
            Arg::with_name("ALL")
                .help("print a summary line for every built structure")
                .short("a")
                .long("all"),
        )
        // DEBUGGING
        .arg(
            Arg::with_name("VERBOSE")
                .help("Verbose output; prints the full entry table")
                .long("verbose")
                .short("v"),
        );

    let matches = app.get_matches();

    Ok(CLISettings {
        enc: parse_config(&matches)?,
        all: matches.is_present("ALL"),
        verbose: matches.is_present("VERBOSE"),
    })
}

fn main() -> io::Result<()> {
    let cli = parse_cli()?;

    let group = PredictionStructureGroup::new(&cli.enc).map_err(invalid_input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.all {
        for ps in group.iter() {
            writeln!(
                out,
                "{:14} period {:2} extent {:3} leading {:2} init {:3} steady {:2} dpb {}",
                ps.pred_type.to_string(),
                ps.pred_struct_period,
                ps.maximum_extent,
                ps.leading_pic_count,
                ps.init_pic_count,
                ps.steady_state_pic_count,
                ps.max_dec_pic_buffering()
            )?;
        }
        return Ok(());
    }

    let ps = group.get_for_config(&cli.enc).map_err(invalid_input)?;
    if cli.verbose {
        write!(out, "{}", ps)?;
    } else {
        writeln!(
            out,
            "{} period {} extent {} leading {} init {} steady {} dpb {}",
            ps.pred_type,
            ps.pred_struct_period,
            ps.maximum_extent,
            ps.leading_pic_count,
            ps.init_pic_count,
            ps.steady_state_pic_count,
            ps.max_dec_pic_buffering()
        )?;
    }

    Ok(())
}
