#[macro_use] extern crate rsp2_assert_close;

mod shared;
use self::shared::util::{expand_orthorhombic, params, random_structure};

use std::collections::BTreeSet;
use rsp2_mbtr::{ElementIndexMap, Index2D, Mbtr};

#[test]
fn chain_excludes_image_pairs() {
    // one atom per cell along z, with two images on each side
    let structure = expand_orthorhombic([10.0, 10.0, 1.5], &[[0.0, 0.0, 0.0]], &[6], [0, 0, 2]);
    assert_eq!(structure.num_atoms(), 5);
    assert_eq!(structure.cell_limit(), 1);

    let mbtr = Mbtr::new(structure, ElementIndexMap::from_species(vec![6]));
    // only pairs that involve the original atom
    assert_eq!(
        mbtr.pair_indices().to_vec(),
        (1..5).map(|j| Index2D::new(0, j)).collect::<Vec<_>>(),
    );

    let k2 = mbtr.k2_aggregate("inverse_distance", "unity", &params(&[])).unwrap();
    // images in the order they were generated: z = -2, -1, 1, 2 cells
    assert_close!(k2.geometry_values[&Index2D::new(0, 0)], vec![
        1.0 / 3.0, 1.0 / 1.5, 1.0 / 1.5, 1.0 / 3.0,
    ]);
}

#[test]
fn chain_triplets_need_an_original_site() {
    let structure = expand_orthorhombic([10.0, 10.0, 1.5], &[[0.0, 0.0, 0.0]], &[6], [0, 0, 1]);
    let mbtr = Mbtr::new(structure, ElementIndexMap::from_species(vec![6]));
    for index in mbtr.triplet_indices() {
        assert!(index.i == 0 || index.j == 0 || index.k == 0);
    }

    let k3 = mbtr.k3_aggregate("cosine", "unity", &params(&[])).unwrap();
    let values = &k3.geometry_values[&rsp2_mbtr::Index3D::new(0, 0, 0)];
    // sites at z = 0, -1.5, 1.5.  With the original atom as the vertex the angle is
    // straight; with the vertex at either end it is zero.
    assert_close!(abs=1e-12, values.clone(), vec![1.0, 1.0, -1.0]);
    assert_eq!(values.len(), mbtr.triplet_indices().len());
}

#[test]
fn random_structures_are_consistent() {
    for _ in 0..5 {
        let structure = random_structure(9, 3, &[1, 6, 8]);
        let mbtr = Mbtr::new(structure, ElementIndexMap::from_species(vec![1, 6, 8]));

        let pairs = mbtr.pair_indices();
        assert_eq!(pairs.iter().collect::<BTreeSet<_>>().len(), pairs.len());
        for pair in pairs {
            assert!(pair.i < pair.j);
            assert!(pair.i < 3 || pair.j < 3);
        }

        // unity weighting keeps every combination
        let k2 = mbtr.k2_aggregate("inverse_distance", "unity", &params(&[])).unwrap();
        let k3 = mbtr.k3_aggregate("cosine", "unity", &params(&[])).unwrap();
        assert_eq!(k2.num_values(), pairs.len());
        assert_eq!(k3.num_values(), mbtr.triplet_indices().len());

        // zero scale is the same as unity
        let k2_exp = mbtr.k2_aggregate(
            "inverse_distance", "exponential", &params(&[("scale", 0.0), ("cutoff", 1.0)]),
        ).unwrap();
        assert_eq!(*k2_exp, *k2);

        for (key, values) in &k3.geometry_values {
            assert!(key.i <= key.k);
            assert_eq!(values.len(), k3.weight_values[key].len());
            for &value in values {
                assert!(-1.0 - 1e-12 <= value && value <= 1.0 + 1e-12);
            }
        }
    }
}
