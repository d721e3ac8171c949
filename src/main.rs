use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use log::{info, warn};
use std::path::PathBuf;

use bleeper::timefmt::{format_duration, format_time, parse_time};
use bleeper::{
    apply_word_set, build_censor_segments, censor_stats, match_chunks, matched_words, Config,
    MatchMode, RegionList, RenderPlan, Result, Selection, Source, Transcript, WordSet,
};

fn build_cli() -> Command {
    Command::new("bleeper")
        .about("Matches transcript words against word lists and builds bleep segments")
        .version("0.1.0")
        .arg(
            Arg::new("transcript")
                .short('t')
                .long("transcript")
                .value_name("FILE")
                .help("Transcript JSON file with word-level timestamps")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("words")
                .short('w')
                .long("words")
                .value_name("WORD,WORD,...")
                .help("Comma-separated list of words to censor"),
        )
        .arg(
            Arg::new("wordsets")
                .long("wordsets")
                .value_name("FILE")
                .help("JSON file with an array of wordsets to apply")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("exact")
                .long("exact")
                .help("Match whole words (default when no mode flag is given)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("partial")
                .long("partial")
                .help("Match words contained inside longer words")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fuzzy")
                .long("fuzzy")
                .help("Match words within the configured edit distance")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fuzzy-distance")
                .short('d')
                .long("fuzzy-distance")
                .value_name("N")
                .help("Edit-distance threshold for fuzzy matching (1-3)")
                .default_value("1")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("buffer")
                .short('b')
                .long("buffer")
                .value_name("SECONDS")
                .help("Extra time censored around each match (0.0-5.0)")
                .default_value("0.0")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("region")
                .short('r')
                .long("region")
                .value_name("START-END")
                .help("Manually censored time range, e.g. 12.5-14 or 1:05-1:12 (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("sound")
                .short('s')
                .long("sound")
                .value_name("SOUND")
                .help("Bleep sound handed to the renderer")
                .default_value("bleep")
                .value_parser(["bleep", "brown", "dolphin", "trex", "silence"]),
        )
        .arg(
            Arg::new("volume")
                .short('v')
                .long("volume")
                .value_name("PERCENT")
                .help("Bleep volume (0-100)")
                .default_value("80")
                .value_parser(clap::value_parser!(u8)),
        )
        .arg(
            Arg::new("attenuation")
                .long("attenuation")
                .value_name("FLOAT")
                .help("Gain left on the original audio under the bleep (0.0-1.0)")
                .default_value("0.0")
                .value_parser(clap::value_parser!(f32)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

fn parse_config(matches: &clap::ArgMatches) -> Result<Config> {
    let mut builder = Config::builder();

    if let Some(words) = matches.get_one::<String>("words") {
        builder = builder.words(words);
    }

    let mode = MatchMode {
        exact: matches.get_flag("exact"),
        partial: matches.get_flag("partial"),
        fuzzy: matches.get_flag("fuzzy"),
    };
    // No mode flag at all falls back to exact matching
    let mode = if mode.any() { mode } else { MatchMode::default() };
    builder = builder.mode(mode);

    if let Some(&distance) = matches.get_one::<usize>("fuzzy-distance") {
        builder = builder.fuzzy_distance(distance)?;
    }

    if let Some(&buffer) = matches.get_one::<f64>("buffer") {
        builder = builder.buffer(buffer)?;
    }

    if let Some(sound) = matches.get_one::<String>("sound") {
        builder = builder.bleep_sound(sound.parse()?);
    }

    if let Some(&volume) = matches.get_one::<u8>("volume") {
        builder = builder.bleep_volume(volume)?;
    }

    if let Some(&attenuation) = matches.get_one::<f32>("attenuation") {
        builder = builder.original_volume_reduction(attenuation)?;
    }

    builder.build()
}

fn parse_region(value: &str) -> anyhow::Result<(f64, f64)> {
    let (start, end) = value
        .split_once('-')
        .ok_or_else(|| anyhow::anyhow!("region must be START-END, got {:?}", value))?;
    let start =
        parse_time(start).ok_or_else(|| anyhow::anyhow!("invalid region start {:?}", start))?;
    let end = parse_time(end).ok_or_else(|| anyhow::anyhow!("invalid region end {:?}", end))?;
    Ok((start, end))
}

fn main() -> anyhow::Result<()> {
    let app = build_cli();
    let matches = app.get_matches();

    // Initialize logging
    if matches.get_flag("verbose") {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = parse_config(&matches)?;

    let transcript_path = matches.get_one::<PathBuf>("transcript").unwrap();
    let raw = std::fs::read_to_string(transcript_path)
        .with_context(|| format!("failed to read transcript {}", transcript_path.display()))?;
    let transcript = Transcript::from_json(&raw)?;

    info!(
        "Loaded transcript with {} chunk(s) from {:?}",
        transcript.len(),
        transcript_path
    );

    let (null_timestamps, total_chunks) = match &transcript.metadata {
        Some(metadata) => (metadata.null_timestamp_count, metadata.total_chunks),
        None => (transcript.null_timestamp_count(), transcript.len()),
    };
    if null_timestamps > 0 {
        warn!(
            "{} of {} chunk(s) have no usable timestamps and cannot be censored",
            null_timestamps, total_chunks
        );
    }

    let mut selection = Selection::new();

    let matched = match_chunks(
        &mut selection,
        &transcript,
        &config.words,
        &config.match_options(),
        Source::Manual,
    );
    if !config.words.is_empty() {
        info!("Word list matched {} chunk(s)", matched.len());
    }

    if let Some(path) = matches.get_one::<PathBuf>("wordsets") {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read wordsets {}", path.display()))?;
        for set in WordSet::list_from_json(&raw)? {
            let hits = apply_word_set(&mut selection, &transcript, &set);
            info!("Wordset {} ({}) matched {} chunk(s)", set.id, set.name, hits.len());
        }
    }

    let mut regions = RegionList::new();
    if let Some(values) = matches.get_many::<String>("region") {
        for value in values {
            let (start, end) = parse_region(value)?;
            if regions.add(start, end).is_none() {
                warn!("Ignoring empty region {:?}", value);
            }
        }
    }

    let words = matched_words(&selection, Some(&transcript), &regions);
    let segments = build_censor_segments(&words, config.buffer);
    let stats = censor_stats(&words, &segments);

    info!(
        "Censoring {} segment(s), {} total ({} from transcript, {} from timeline)",
        stats.merged_segments,
        format_duration(stats.censored_duration),
        stats.from_transcript,
        stats.from_timeline
    );
    for segment in &segments {
        info!(
            "  {} - {}: {}",
            format_time(segment.start),
            format_time(segment.end),
            segment.label
        );
    }

    let plan = RenderPlan::new(segments, &config);
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
