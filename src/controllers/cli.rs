use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "glt")]
#[command(version)]
#[command(about = "Translate text from the command line and optionally hear it spoken")]
#[command(
    long_about = "Translate text from the command line and optionally hear it spoken.\n\n\
                  The target language may be a name or a code and is matched fuzzily, \
                  so `frnch`, `French` and `fr` all select French. The resolved code \
                  is printed before the translation."
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Target language, as a name or code
    #[arg(value_name = "LANG", required_unless_present = "list")]
    pub language: Option<String>,

    /// Speak the translation aloud
    #[arg(short, long)]
    pub speak: bool,

    /// Synthesize and cache the audio without playing it
    #[arg(short = 'n', long, requires = "speak")]
    pub no_play: bool,

    /// Slower speech
    #[arg(long, requires = "speak")]
    pub slow: bool,

    /// Source language (detected automatically when omitted)
    #[arg(short, long, value_name = "LANG")]
    pub from: Option<String>,

    /// List supported languages
    #[arg(short, long, exclusive = true)]
    pub list: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Text to translate
    #[arg(
        value_name = "TEXT",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required_unless_present = "list"
    )]
    pub text: Vec<String>,
}

/// What the user asked for, once arguments are parsed
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListLanguages,
    Translate(TranslateCommand),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslateCommand {
    pub language: String,
    pub source: Option<String>,
    pub text: String,
    pub speak: bool,
    pub play: bool,
}

impl Cli {
    pub fn action(&self) -> Command {
        if self.list {
            return Command::ListLanguages;
        }

        Command::Translate(TranslateCommand {
            language: self.language.clone().unwrap_or_default(),
            source: self.from.clone(),
            text: self.text.join(" ").trim().to_string(),
            speak: self.speak,
            play: !self.no_play,
        })
    }

    /// Default log filter for the verbosity flags
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "glt=warn",
            1 => "glt=debug",
            _ => "glt=trace",
        }
    }
}
