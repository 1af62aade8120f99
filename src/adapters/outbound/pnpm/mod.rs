/// pnpm lockfile decoding
mod lockfile_parser;

pub use lockfile_parser::PnpmLockfileParser;
