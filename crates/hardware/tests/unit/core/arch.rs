use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use vecsim_core::common::Resource;
use vecsim_core::core::ArchState;
use vecsim_core::core::arch::{ScalarRegisterFile, VectorControl, VectorRegisterFile};
use vecsim_core::{Config, SimError};

fn reset_state() -> ArchState {
    let config =
        Config::from_parameters([("vectorLaneCount", 4_i64), ("vectorLengthDefault", 16)]).unwrap();
    ArchState::new(&config, &[], &[]).unwrap()
}

#[test]
fn reset_state_is_zeroed_with_full_length_and_mask() {
    let state = reset_state();
    assert_eq!(state.srf.as_slice(), &[0; 8]);
    assert!(state.vrf.registers().iter().all(|r| r.len() == 16 && r.iter().all(|v| *v == 0)));
    assert_eq!(state.vcr.length(), 16);
    assert_eq!(state.vcr.mask(), &[true; 16]);
}

#[rstest]
#[case(8)]
#[case(9)]
#[case(usize::MAX)]
fn scalar_register_index_out_of_range(#[case] idx: usize) {
    let mut srf = ScalarRegisterFile::new();
    assert!(matches!(
        srf.read(idx),
        Err(SimError::OutOfRange {
            resource: Resource::ScalarRegister,
            ..
        })
    ));
    assert!(srf.write(idx, 1).is_err());
}

#[test]
fn vector_element_access_is_bounded_by_active_length() {
    let mut vrf = VectorRegisterFile::new(8);
    vrf.write(2, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(vrf.read_element(2, 3, 4).unwrap(), 4);
    assert_eq!(
        vrf.read_element(2, 4, 4).unwrap_err(),
        SimError::out_of_range(Resource::VectorElement, 4, 4)
    );
    assert!(vrf.write_element(2, 7, 8, 0).is_ok());
    assert!(vrf.write_element(2, 8, 8, 0).is_err());
    assert!(vrf.read(8).is_err());
}

#[test]
fn partial_register_write_keeps_tail() {
    let mut vrf = VectorRegisterFile::new(4);
    vrf.write(0, &[9, 9, 9, 9]).unwrap();
    vrf.write(0, &[1, 2]).unwrap();
    assert_eq!(vrf.read(0).unwrap(), &[1, 2, 9, 9]);
    assert!(vrf.write(0, &[0; 5]).is_err());
}

#[test]
fn mask_is_truncated_and_padded_to_mvl() {
    let mut vcr = VectorControl::new(4);
    vcr.set_mask(&[false, true]);
    assert_eq!(vcr.mask(), &[false, true, false, false]);
    vcr.set_mask(&[true; 10]);
    assert_eq!(vcr.mask(), &[true; 4]);
}

proptest! {
    #[test]
    fn scalar_registers_hold_any_word(idx in 0usize..8, val in any::<i32>()) {
        let mut srf = ScalarRegisterFile::new();
        srf.write(idx, val).unwrap();
        prop_assert_eq!(srf.read(idx).unwrap(), val);
        for other in (0..8).filter(|i| *i != idx) {
            prop_assert_eq!(srf.read(other).unwrap(), 0);
        }
    }

    #[test]
    fn vector_length_accepts_exactly_zero_to_mvl(mvl in 1usize..128, value in -4i32..256) {
        let mut vcr = VectorControl::new(mvl);
        let accepted = vcr.set_length(value).is_ok();
        prop_assert_eq!(accepted, value >= 0 && value as usize <= mvl);
        if accepted {
            prop_assert_eq!(vcr.length(), value as usize);
        } else {
            prop_assert_eq!(vcr.length(), mvl);
        }
    }
}
