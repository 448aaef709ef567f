//! the c++ that goes in front of every translated program

const HEADER: &str = include_str!("header.hpp");
const TRACE_OFF: &str = include_str!("trace_off.hpp");
const TRACE_ON: &str = include_str!("trace_on.hpp");
const LIBRARY: &str = include_str!("library.hpp");

/// includes, tracing support (or the stand-ins for it), and the library
pub fn prologue(trace: bool) -> String {
    let mut o = String::with_capacity(HEADER.len() + TRACE_ON.len() + LIBRARY.len());
    o.push_str(HEADER);
    o.push_str(if trace { TRACE_ON } else { TRACE_OFF });
    o.push_str(LIBRARY);
    o
}
