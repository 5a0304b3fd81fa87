use rsp2_mbtr::{AtomicStructure, ElementIndexMap, Mbtr, Parameters};

pub fn params(pairs: &[(&str, f64)]) -> Parameters
{ pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect() }

/// The three-site structure used throughout the tests.
///
/// H at the origin, H at `x = 1`, O at `y = 1`, all in the original cell.
pub fn water_like() -> Mbtr {
    let structure = AtomicStructure::new(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![1, 1, 8],
        3,
    );
    let elements = ElementIndexMap::from_map(vec![(1, 0), (8, 1)].into_iter().collect());
    Mbtr::new(structure, elements)
}

/// Expand a cell with an orthorhombic lattice into `2 * reps + 1` cells along each axis.
///
/// The sites of the original cell come first, in their original order, so the result has
/// a cell limit of `carts.len()`.
pub fn expand_orthorhombic(
    lengths: [f64; 3],
    carts: &[[f64; 3]],
    atomic_numbers: &[u32],
    reps: [i32; 3],
) -> AtomicStructure {
    assert_eq!(carts.len(), atomic_numbers.len());

    let mut images = vec![[0, 0, 0]];
    for a in -reps[0]..=reps[0] {
        for b in -reps[1]..=reps[1] {
            for c in -reps[2]..=reps[2] {
                if [a, b, c] != [0, 0, 0] {
                    images.push([a, b, c]);
                }
            }
        }
    }

    let mut positions = vec![];
    let mut numbers = vec![];
    for image in &images {
        for (cart, &z) in carts.iter().zip(atomic_numbers) {
            positions.push([
                cart[0] + image[0] as f64 * lengths[0],
                cart[1] + image[1] as f64 * lengths[1],
                cart[2] + image[2] as f64 * lengths[2],
            ]);
            numbers.push(z);
        }
    }
    AtomicStructure::new(positions, numbers, carts.len())
}

pub fn random_structure(num_atoms: usize, cell_limit: usize, species: &[u32]) -> AtomicStructure {
    let positions = (0..num_atoms).map(|_| [
        5.0 * ::rand::random::<f64>(),
        5.0 * ::rand::random::<f64>(),
        5.0 * ::rand::random::<f64>(),
    ]).collect::<Vec<_>>();
    let numbers = (0..num_atoms).map(|n| species[n % species.len()]).collect();
    AtomicStructure::new(positions, numbers, cell_limit)
}
