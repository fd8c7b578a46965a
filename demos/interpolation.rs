fn main() {
    let middle = hexlerp::lerp_hex("#FF0000", "#00FF00", 0.5, true).unwrap();
    println!("interpolated at 0.5 = {middle}");

    // Show the Lab components of the result.
    let lab = hexlerp::hex_to_lab(&middle).unwrap();
    println!("in Lab = {lab}");

    for color in hexlerp::gradient("#FF0000", "#00FF00", 5, true).unwrap() {
        println!("{color}");
    }
}
