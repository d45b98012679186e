pub mod header;
pub mod hexdump;
pub mod name;
pub mod reader;
pub mod record;
pub mod reverse;

pub use header::HEADER_LEN;
pub use name::{decode_name, encode_dotted, encode_name, MAX_POINTER_HOPS};
pub use reader::WireReader;
pub use record::{read_question, read_questions, read_record, read_records, RR_FIXED_LEN};
pub use reverse::reverse_name;
