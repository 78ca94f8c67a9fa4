#[cfg(test)]
pub use self::patch_file::apply_patch;
pub use self::patch_file::patch_file;
pub use self::read_file::read_file;
pub use self::write_file::write_file;
#[cfg(test)]
pub(crate) use self::write_file::persist_temp;

mod patch_file;
mod read_file;
mod write_file;
