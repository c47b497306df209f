// A module to parse command line arguments

use ::clap::Parser;
use ::clap::ValueEnum;
use ::nom::character::complete::char;
use ::nom::character::complete::digit1;
use ::nom::combinator::all_consuming;
use ::nom::combinator::map_res;
use ::nom::sequence::separated_pair;
use ::nom::Finish;
use ::nom::IResult;
use ::std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "pdfhint",
    version = "0.1.0",
    about = "Decode the hint tables of a linearized PDF file and check page availability"
)]
pub struct Args {
    #[clap(short, long, help = "Enable verbose output")]
    pub verbose: bool,
    #[clap(long, help = "The file holding the primary hint stream data")]
    pub hint_stream: PathBuf,
    #[clap(
        long,
        value_enum,
        default_value = "none",
        help = "The filter the hint stream data is encoded with"
    )]
    pub filter: FilterArg,
    #[clap(long, help = "The offset of the shared object hint table, /S")]
    pub shared_offset: i64,
    #[clap(long, help = "The number of pages, /N")]
    pub page_count: i64,
    #[clap(long, default_value_t = 0, help = "The index of the first page, /P")]
    pub first_page: i64,
    #[clap(long, help = "The object number of the first page, /O")]
    pub first_page_object: i64,
    #[clap(long, help = "The offset of the end of the first page, /E")]
    pub first_page_end: i64,
    #[clap(long, help = "The offset of the primary hint stream, /H")]
    pub hint_offset: i64,
    #[clap(long, help = "The length of the primary hint stream, /H")]
    pub hint_length: i64,
    #[clap(
        long,
        value_parser = parse_range,
        help = "A downloaded byte range, OFFSET:LENGTH"
    )]
    pub available: Vec<ByteRange>,
    #[clap(long, help = "A page index to check")]
    pub page: Vec<u32>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterArg {
    None,
    Flate,
    AsciiHex,
}

impl FilterArg {
    pub(super) fn name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Flate => Some("FlateDecode"),
            Self::AsciiHex => Some("ASCIIHexDecode"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub offset: u64,
    pub length: u64,
}

fn number(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |digits: &str| digits.parse::<u64>())(input)
}

fn range(input: &str) -> IResult<&str, (u64, u64)> {
    all_consuming(separated_pair(number, char(':'), number))(input)
}

fn parse_range(value: &str) -> Result<ByteRange, String> {
    range(value)
        .finish()
        .map(|(_, (offset, length))| ByteRange { offset, length })
        .map_err(|err| format!("Expected OFFSET:LENGTH. Error: {:?}", err.code))
}
