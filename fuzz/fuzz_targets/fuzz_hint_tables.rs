#![no_main]
use libfuzzer_sys::fuzz_target;

use pdfhint::object::Dictionary;
use pdfhint::object::Stream;
use pdfhint::DataAvail;
use pdfhint::Document;
use pdfhint::HintTables;
use pdfhint::Linearized;

fn header(data: &[u8], index: usize) -> i64 {
    let mut value = [0; 4];
    value.copy_from_slice(&data[index * 4..index * 4 + 4]);
    i64::from(u32::from_be_bytes(value))
}

// The first 12 bytes pick the page count, the first page index and the shared
// object hint table offset. The rest is the hint stream.
fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }
    let page_count = header(data, 0) % (1 << 20) + 1;
    let first_page_index = header(data, 1) % page_count;
    let shared_offset = header(data, 2);

    let document = Document::new();
    let parameters = Dictionary::new()
        .with("N", page_count)
        .with("P", first_page_index)
        .with("O", 1i64)
        .with("E", 4000i64)
        .with("H", vec![1000i64, 200]);
    let linearized = match Linearized::new(&document, &parameters) {
        Ok(linearized) => linearized,
        Err(_) => return,
    };
    let stream = Stream::new(Dictionary::new().with("S", shared_offset), &data[12..]);
    let mut available = |_: u64, _: u64| true;
    if let Some(hint_tables) = HintTables::parse(&document, &linearized, &stream, &mut available) {
        for index in 0..hint_tables.page_count().min(64) {
            let avail = hint_tables.check_page(index, &mut available);
            assert_ne!(avail, DataAvail::NotAvailable);
            let _ = hint_tables.page_pos(index);
        }
    }
});
