use crsmat::{MatrixResult, SparseMatrix, StorageConfig};

fn main() -> MatrixResult<()> {
    env_logger::init();

    println!("crsmat {}: mutable CRS sparse matrices", crsmat::VERSION);

    // Fill in a few entries of an empty matrix
    let config = StorageConfig::default().with_nnz_capacity(4);
    let mut a = SparseMatrix::<f64>::with_config(3, 3, config);
    a.set(1, 2, 7.0)?;
    a.set(0, 0, 1.0)?;
    *a.get_or_insert(1, 0)? += 2.5;

    println!("\nMatrix A:");
    println!("{:?}", a);
    println!("rendered: {}", a);
    println!("rowind:   {:?}", a.rowind());
    println!("col:      {:?}", a.col());

    let b = SparseMatrix::<f64>::from_vec_with_shape(vec![1.0, 2.0, 3.0, 4.0], 2, 2)?;
    println!("\nMatrix B: {}", b);

    let v = SparseMatrix::<f64>::from_vec(vec![1.0, 2.0, 3.0]);
    println!("Vector v: {}", v);
    println!("Scalar s: {}", SparseMatrix::from_scalar(42.0));

    match a.get(3, 0) {
        Ok(_) => println!("\nunexpected access beyond the shape"),
        Err(err) => println!("\nA(3, 0): {}", err),
    }

    Ok(())
}
