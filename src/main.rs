use std::env;
use std::io::{self, Read};
use std::process;

use chordal::{transpose_all_down, transpose_all_up, Chord};

fn usage() -> ! {
    eprintln!("Usage: chordal [--down] [--json] <semitones> [chord ...]");
    eprintln!("       reads chords from stdin when none are given as arguments");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut down = false;
    let mut json = false;
    let mut rest = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "--down" => down = true,
            "--json" => json = true,
            _ => rest.push(arg.clone()),
        }
    }

    if rest.is_empty() {
        usage();
    }

    let semitones: i32 = match rest[0].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: '{}' is not a semitone count", rest[0]);
            process::exit(1);
        }
    };

    let names: Vec<String> = if rest.len() > 1 {
        rest[1..].to_vec()
    } else {
        let mut input = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut input) {
            eprintln!("Error reading stdin: {}", e);
            process::exit(1);
        }
        input.split_whitespace().map(str::to_string).collect()
    };

    let mut chords: Vec<Chord> = Vec::with_capacity(names.len());
    for name in &names {
        match name.parse() {
            Ok(chord) => chords.push(chord),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    let result = if down {
        transpose_all_down(&chords, semitones)
    } else {
        transpose_all_up(&chords, semitones)
    };

    let transposed = match result {
        Ok(transposed) => transposed,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if json {
        match serde_json::to_string(&transposed) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error encoding JSON: {}", e);
                process::exit(1);
            }
        }
    } else {
        let names: Vec<String> = transposed.iter().map(|c| c.to_string()).collect();
        println!("{}", names.join(" "));
    }
}
