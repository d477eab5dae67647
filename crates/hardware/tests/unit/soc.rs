use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vecsim_core::SimError;
use vecsim_core::common::Resource;
use vecsim_core::soc::{DataMemory, MemoryKind};

#[test]
fn memories_report_their_kind() {
    let sdm = DataMemory::new(MemoryKind::Scalar, 2, &[]).unwrap();
    let vdm = DataMemory::new(MemoryKind::Vector, 2, &[]).unwrap();
    assert_eq!(sdm.kind().to_string(), "SDMEM");
    assert_eq!(vdm.kind().to_string(), "VDMEM");
    assert_eq!(
        vdm.read(4).unwrap_err(),
        SimError::out_of_range(Resource::VectorMemory, 4, 4)
    );
}

#[test]
fn image_filling_memory_exactly_is_accepted() {
    let image: Vec<i32> = (0..16).collect();
    let mem = DataMemory::new(MemoryKind::Scalar, 4, &image).unwrap();
    assert_eq!(mem.words(), image.as_slice());
}

proptest! {
    #[test]
    fn image_is_preserved_and_tail_is_zero(
        bits in 1u32..10,
        image in prop::collection::vec(any::<i32>(), 0..64),
    ) {
        let size = 1usize << bits;
        let result = DataMemory::new(MemoryKind::Scalar, bits, &image);
        if image.len() > size {
            prop_assert!(result.is_err());
        } else {
            let mem = result.unwrap();
            prop_assert_eq!(mem.size(), size);
            prop_assert_eq!(&mem.words()[..image.len()], image.as_slice());
            prop_assert!(mem.words()[image.len()..].iter().all(|w| *w == 0));
        }
    }

    #[test]
    fn writes_are_visible_only_at_their_address(
        addr in 0i64..256,
        other in 0i64..256,
        val in any::<i32>(),
    ) {
        let mut mem = DataMemory::new(MemoryKind::Scalar, 8, &[]).unwrap();
        mem.write(addr, val).unwrap();
        prop_assert_eq!(mem.read(addr).unwrap(), val);
        if other != addr {
            prop_assert_eq!(mem.read(other).unwrap(), 0);
        }
    }
}
