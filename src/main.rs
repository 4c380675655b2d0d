use clap::{Parser, Subcommand, ValueEnum};
use tagver::{Canonical, Dialect, GitPorcelain, ParseError, Release, Version};

#[derive(Clone, PartialEq, Eq, ValueEnum, Debug)]
enum DialectArg {
    /// SemVer-style text, e.g. `1.2.3-alpha4+aabbccd`
    Canonical,
    /// `git describe` porcelain text, e.g. `v1.2.3-4-gaabbccd`
    Porcelain,
}

impl DialectArg {
    fn parse(&self, version_str: &str) -> Result<Version, ParseError> {
        match self {
            DialectArg::Canonical => Canonical::parse(version_str),
            DialectArg::Porcelain => GitPorcelain::parse(version_str),
        }
    }

    fn serialize(&self, version: &Version) -> String {
        match self {
            DialectArg::Canonical => Canonical::serialize(version),
            DialectArg::Porcelain => GitPorcelain::serialize(version),
        }
    }
}

#[derive(Clone, PartialEq, Eq, ValueEnum, Debug)]
enum LevelArg {
    Major,
    Minor,
    Patch,
}

impl LevelArg {
    fn next(&self, release: &Release) -> Release {
        match self {
            LevelArg::Major => release.next_major(),
            LevelArg::Minor => release.next_minor(),
            LevelArg::Patch => release.next_patch(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validates that a version parses in a dialect
    Valid {
        /// The version string to validate
        version: String,

        /// The dialect to parse with
        #[arg(short, long, value_enum, default_value_t = DialectArg::Canonical)]
        dialect: DialectArg,
    },

    /// Prints the release after the one a version belongs to.
    ///
    /// Pre-release and dirty versions are first unwrapped to their release
    /// part, so `v1.2.3-4-gaabbccd` bumps the same way `v1.2.3` does.
    Bump {
        /// The version string to increment
        version: String,

        /// The dialect to parse with and serialize to
        #[arg(short, long, value_enum, default_value_t = DialectArg::Canonical)]
        dialect: DialectArg,

        /// The component to increment
        #[arg(short, long, value_enum, default_value_t = LevelArg::Patch)]
        level: LevelArg,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn do_work(cli: Cli) -> Result<Output, ParseError> {
    match cli.command {
        Commands::Valid { version, dialect } => Ok(if dialect.parse(&version).is_ok() {
            ("true".to_string(), 0)
        } else {
            ("false".to_string(), 1)
        }),
        Commands::Bump {
            version,
            dialect,
            level,
        } => {
            let current = dialect.parse(&version)?;
            let next = level.next(current.release_part());
            Ok((dialect.serialize(&next.into()), 0))
        }
    }
}
