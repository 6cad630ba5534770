#[macro_use]
extern crate timeit;

use logplex_syslog::{parse_frame, Decoder};

// Rough timings with the timeit! macro

fn framed(content: &[u8]) -> Vec<u8> {
    let mut out = format!("{} ", content.len()).into_bytes();
    out.extend_from_slice(content);
    out
}

fn main() {
    println!("Parsing the smallest possible frame:");
    let simple_frame = b"<1>- - - - - ";
    timeit!({
        parse_frame(simple_frame.to_vec()).unwrap();
    });
    println!("Parsing a router frame:");
    let router_frame: &[u8] = br#"<158>2012-12-10T22:05:02.081427+00:00 d.7bd2c5e3-e5ab-4a55-a8b5-6d1d3a1bb2f4 heroku router - at=info method=GET path="/" host=example.herokuapp.com fwd="10.0.0.1" dyno=web.1 connect=1ms service=18ms status=200 bytes=1024"#;
    timeit!({
        parse_frame(router_frame.to_vec()).unwrap();
    });
    println!("Decoding a stream of 1000 router frames:");
    let one = framed(router_frame);
    let stream: Vec<u8> = one.iter().cycle().take(one.len() * 1000).copied().collect();
    timeit!({
        let count = Decoder::new(&stream[..]).filter(|m| m.is_ok()).count();
        assert_eq!(count, 1000);
    });
}
