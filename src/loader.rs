use crate::console::Console;
use crate::memory::Memory;
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, ErrorKind, Read};

/// Loads one object image: a big-endian origin word followed by big-endian
/// data words, stored at consecutive addresses from the origin.
///
/// EOF between words ends the image; so does EOF inside a word, which drops
/// the odd trailing byte. An image reaching the top of memory stores at most
/// `0x10000 - origin` words and ignores the rest.
pub(crate) fn load<R: Read, C: Console>(mut reader: R, memory: &mut Memory<C>) -> io::Result<()> {
    let origin = reader.read_u16::<BigEndian>()?;

    let mut address = origin;
    loop {
        match reader.read_u16::<BigEndian>() {
            Ok(word) => {
                memory.write(address, word);
                address = match address.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::ScriptedConsole;
    use std::io::Cursor;

    fn memory() -> Memory<ScriptedConsole> {
        Memory::new(ScriptedConsole::new())
    }

    #[test]
    fn words_land_at_the_origin() {
        let mut memory = memory();

        load(Cursor::new(vec![0x30, 0x00, 0xAB, 0xCD]), &mut memory).unwrap();

        assert_eq!(memory.read(0x3000).unwrap(), 0xABCD);
    }

    #[test]
    fn consecutive_words_fill_consecutive_addresses() {
        let mut memory = memory();

        let image = vec![0x40, 0x00, 0x12, 0x34, 0x56, 0x78, 0x00, 0x01];
        load(Cursor::new(image), &mut memory).unwrap();

        assert_eq!(memory.read(0x4000).unwrap(), 0x1234);
        assert_eq!(memory.read(0x4001).unwrap(), 0x5678);
        assert_eq!(memory.read(0x4002).unwrap(), 0x0001);
        assert_eq!(memory.read(0x4003).unwrap(), 0);
    }

    #[test]
    fn odd_trailing_byte_is_dropped() {
        let mut memory = memory();

        load(Cursor::new(vec![0x30, 0x00, 0xAB, 0xCD, 0xEF]), &mut memory).unwrap();

        assert_eq!(memory.read(0x3000).unwrap(), 0xABCD);
        assert_eq!(memory.read(0x3001).unwrap(), 0);
    }

    #[test]
    fn later_images_override_earlier_ones() {
        let mut memory = memory();

        load(Cursor::new(vec![0x30, 0x00, 0x11, 0x11, 0x22, 0x22]), &mut memory).unwrap();
        load(Cursor::new(vec![0x30, 0x01, 0x33, 0x33]), &mut memory).unwrap();

        assert_eq!(memory.read(0x3000).unwrap(), 0x1111);
        assert_eq!(memory.read(0x3001).unwrap(), 0x3333);
    }

    #[test]
    fn image_stops_at_the_top_of_memory() {
        let mut memory = memory();

        // Origin 0xFFFF with two data words: only the first fits.
        load(
            Cursor::new(vec![0xFF, 0xFF, 0xAA, 0xAA, 0xBB, 0xBB]),
            &mut memory,
        )
        .unwrap();

        assert_eq!(memory.read(0xFFFF).unwrap(), 0xAAAA);
        assert_eq!(memory.read(0x0000).unwrap(), 0);
    }

    #[test]
    fn empty_stream_is_a_load_failure() {
        let mut memory = memory();

        let err = load(Cursor::new(Vec::new()), &mut memory).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn origin_alone_loads_nothing() {
        let mut memory = memory();

        load(Cursor::new(vec![0x30, 0x00]), &mut memory).unwrap();

        assert_eq!(memory.read(0x3000).unwrap(), 0);
    }
}
