mod arg;
mod fs;

use ::clap::Parser;
use ::env_logger::Env;
use ::log::error;
use ::log::info;
use ::pdfhint::object::Dictionary;
use ::pdfhint::object::Stream;
use ::pdfhint::Document;
use ::pdfhint::HintTables;
use ::pdfhint::Linearized;
use ::pdfhint::RangeTracker;
use ::std::process::ExitCode;

use self::arg::Args;
use self::fs::read_hint_stream;

fn print_tables(hint_tables: &HintTables) {
    println!("{}", hint_tables.linearized());
    println!("First page object offset: {}", hint_tables.first_page_object_offset());
    for index in 0..hint_tables.page_count() {
        if let Some(page_pos) = hint_tables.page_pos(index) {
            println!(
                "page {}: offset {} length {} object {} shared {:?}",
                index,
                page_pos.offset,
                page_pos.length,
                page_pos.object_number,
                hint_tables.page_shared_identifiers(index).unwrap_or_default()
            );
        }
    }
    let numbers = hint_tables.shared_object_numbers();
    let offsets = hint_tables.shared_object_offsets();
    let lengths = hint_tables.shared_object_lengths();
    for (entry, number) in numbers.iter().enumerate() {
        println!(
            "shared {}: object {} offset {} length {}",
            entry, number, offsets[entry], lengths[entry]
        );
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let data = match read_hint_stream(&args.hint_stream) {
        Some(data) => data,
        None => return ExitCode::FAILURE,
    };
    let mut dictionary = Dictionary::new().with("S", args.shared_offset);
    if let Some(filter) = args.filter.name() {
        dictionary = dictionary.with("Filter", filter);
    }
    let stream = Stream::new(dictionary, data);

    let document = Document::new();
    let parameters = Dictionary::new()
        .with("N", args.page_count)
        .with("P", args.first_page)
        .with("O", args.first_page_object)
        .with("E", args.first_page_end)
        .with("H", vec![args.hint_offset, args.hint_length]);
    let linearized = match Linearized::new(&document, &parameters) {
        Ok(linearized) => linearized,
        Err(err) => {
            error!("Invalid linearization parameters: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let hint_tables = match HintTables::load_hint_stream(&document, &linearized, &stream) {
        Ok(hint_tables) => hint_tables,
        Err(err) => {
            error!("Failed to decode the hint tables: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!("Decoded the hint tables of {} pages", hint_tables.page_count());
    print_tables(&hint_tables);

    let mut tracker = RangeTracker::new();
    for range in &args.available {
        tracker.mark_available(range.offset, range.length);
    }
    for &index in &args.page {
        let avail = hint_tables.check_page(index, &mut tracker);
        println!("page {}: {}", index, avail);
        for (offset, length) in tracker.requested() {
            println!("  requested {}:{}", offset, length);
        }
        tracker.clear_requested();
    }
    ExitCode::SUCCESS
}
