// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `prepare` subcommand and all its flags.
//
// Every flag is optional. Without `--config` the flags are laid
// over the built-in defaults; with `--config` they are laid over
// the values read from the file, so a flag always wins.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::prepare_use_case::PrepareConfig;
use crate::data::balancer::BalanceOptions;
use crate::domain::split::Split;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn one CSV split into model-ready examples
    Prepare(PrepareArgs),
}

/// All arguments for the `prepare` command.
#[derive(Args, Debug, Default)]
pub struct PrepareArgs {
    /// JSON config file; flags given here override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// CSV file with text, intent and tag columns
    #[arg(long)]
    pub data_path: Option<PathBuf>,

    /// train, eval (or valid, dev) or test [default: train]
    #[arg(long)]
    pub split: Option<Split>,

    /// Where examples and (train split) label files are written [default: prepared]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Where eval/test runs read label files [default: the output dir]
    #[arg(long)]
    pub labels_dir: Option<PathBuf>,

    /// Column holding the utterance [default: text]
    #[arg(long)]
    pub text_col: Option<String>,

    /// Column holding the intent label [default: intent]
    #[arg(long)]
    pub intent_col: Option<String>,

    /// Column holding the space-separated tags [default: tag]
    #[arg(long)]
    pub tag_col: Option<String>,

    /// Do not lowercase text
    #[arg(long)]
    pub keep_case: bool,

    /// Do not strip emoji
    #[arg(long)]
    pub keep_emoji: bool,

    /// Do not strip URLs
    #[arg(long)]
    pub keep_urls: bool,

    /// Strip punctuation and symbols
    #[arg(long)]
    pub remove_special_tokens: bool,

    /// Resample every intent class to the same size before processing
    #[arg(long)]
    pub balance: bool,

    /// Rows per class when balancing [default: size of the largest class]
    #[arg(long)]
    pub size_per_class: Option<usize>,

    /// Sample with replacement when balancing
    #[arg(long)]
    pub with_replacement: bool,

    /// Seed for the balancing RNG; does not turn balancing on [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reserved intent labels, comma-separated [default: UNK]
    #[arg(long, value_delimiter = ',')]
    pub special_intents: Option<Vec<String>>,

    /// Reserved tag labels, comma-separated [default: PAD,UNK]
    #[arg(long, value_delimiter = ',')]
    pub special_tags: Option<Vec<String>>,

    /// Sentinel for labels missing from the vocabulary [default: UNK]
    #[arg(long)]
    pub unk_label: Option<String>,
}

impl PrepareArgs {
    /// Lay the given flags over `config`.
    pub fn apply(self, config: &mut PrepareConfig) {
        if let Some(path) = self.data_path {
            config.data_path = Some(path);
        }
        if let Some(split) = self.split {
            config.split = split;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(dir) = self.labels_dir {
            config.labels_dir = Some(dir);
        }

        let columns = &mut config.processor.columns;
        if let Some(col) = self.text_col {
            columns.text = col;
        }
        if let Some(col) = self.intent_col {
            columns.intent = col;
        }
        if let Some(col) = self.tag_col {
            columns.tag = col;
        }

        let normalize = &mut config.processor.normalize;
        if self.keep_case {
            normalize.lowercase = false;
        }
        if self.keep_emoji {
            normalize.remove_emoji = false;
        }
        if self.keep_urls {
            normalize.remove_url = false;
        }
        if self.remove_special_tokens {
            normalize.remove_special_tokens = true;
        }

        // --seed only tunes balancing; it never turns it on
        let wants_balance =
            self.balance || self.with_replacement || self.size_per_class.is_some();
        if wants_balance {
            config.processor.balance.get_or_insert_with(BalanceOptions::default);
        }
        match config.processor.balance.as_mut() {
            Some(balance) => {
                if self.size_per_class.is_some() {
                    balance.size_per_class = self.size_per_class;
                }
                if self.with_replacement {
                    balance.with_replacement = true;
                }
                if let Some(seed) = self.seed {
                    balance.seed = seed;
                }
            }
            None if self.seed.is_some() => {
                tracing::warn!("--seed has no effect without balancing");
            }
            None => {}
        }

        let reserved = &mut config.reserved;
        if let Some(intents) = self.special_intents {
            reserved.intents = intents;
        }
        if let Some(tags) = self.special_tags {
            reserved.tags = tags;
        }
        if let Some(unk) = self.unk_label {
            reserved.unk = unk;
        }
    }
}

/// Flags over the built-in defaults.
/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(args: PrepareArgs) -> Self {
        let mut config = PrepareConfig::default();
        args.apply(&mut config);
        config
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(argv: &[&str]) -> PrepareArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Prepare(args) => args,
        }
    }

    #[test]
    fn test_defaults() {
        let config: PrepareConfig = parse(&["joint-nlu-data", "prepare"]).into();
        assert_eq!(config, PrepareConfig::default());
        assert!(config.processor.balance.is_none());
    }

    #[test]
    fn test_flags_map_onto_config() {
        let config: PrepareConfig = parse(&[
            "joint-nlu-data", "prepare",
            "--data-path", "dev.csv",
            "--split", "Dev",
            "--text-col", "utterance",
            "--keep-case",
            "--remove-special-tokens",
            "--special-tags", "PAD,UNK,X",
            "--balance",
            "--seed", "7",
        ])
        .into();

        assert_eq!(config.data_path, Some(PathBuf::from("dev.csv")));
        assert_eq!(config.split, Split::Eval);
        assert_eq!(config.processor.columns.text, "utterance");
        assert_eq!(config.processor.columns.tag, "tag");
        assert!(!config.processor.normalize.lowercase);
        assert!(config.processor.normalize.remove_special_tokens);
        assert_eq!(config.reserved.tags, vec!["PAD", "UNK", "X"]);

        let balance = config.processor.balance.unwrap();
        assert_eq!(balance.seed, 7);
        assert_eq!(balance.size_per_class, None);
    }

    #[test]
    fn test_seed_alone_does_not_enable_balancing() {
        let config: PrepareConfig = parse(&["joint-nlu-data", "prepare", "--seed", "7"]).into();
        assert!(config.processor.balance.is_none());
    }

    #[test]
    fn test_seed_tunes_balancing_from_config_file() {
        let mut config = PrepareConfig::default();
        config.processor.balance = Some(BalanceOptions { size_per_class: Some(3), ..BalanceOptions::default() });
        parse(&["joint-nlu-data", "prepare", "--seed", "9"]).apply(&mut config);

        let balance = config.processor.balance.unwrap();
        assert_eq!(balance.seed, 9);
        assert_eq!(balance.size_per_class, Some(3));
    }

    #[test]
    fn test_size_per_class_enables_balancing() {
        let config: PrepareConfig =
            parse(&["joint-nlu-data", "prepare", "--size-per-class", "4"]).into();
        assert_eq!(config.processor.balance.unwrap().size_per_class, Some(4));
    }

    #[test]
    fn test_flags_override_config_file_values() {
        let mut config = PrepareConfig {
            split: Split::Test,
            output_dir: PathBuf::from("from-file"),
            ..PrepareConfig::default()
        };
        parse(&["joint-nlu-data", "prepare", "--output-dir", "from-flag"]).apply(&mut config);

        assert_eq!(config.split, Split::Test);
        assert_eq!(config.output_dir, PathBuf::from("from-flag"));
    }

    #[test]
    fn test_unknown_split_is_rejected() {
        assert!(Cli::try_parse_from(["joint-nlu-data", "prepare", "--split", "holdout"]).is_err());
    }
}
