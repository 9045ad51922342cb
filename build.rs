// Automatically generate README.md from rustdoc.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    let mut source = File::open("src/lib.rs").unwrap();
    let mut template = File::open("README.tpl").unwrap();

    let content = cargo_readme::generate_readme(
        &PathBuf::from("."), // root
        &mut source,         // source
        Some(&mut template), // template
        // The "add x" arguments don't apply when using a template.
        cargo_readme::ReadmeOptions {
            add_title: true,        // add title
            add_badges: false,      // add badges
            add_license: false,     // add license
            indent_headings: true,  // indent headings
            extract_from_comment: true,
        },
    )
    .unwrap();

    let mut readme = File::create("README.md").unwrap();
    readme.write_all(content.as_bytes()).unwrap();
}
