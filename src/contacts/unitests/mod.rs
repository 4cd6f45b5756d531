#[cfg(test)] mod test_contact;
#[cfg(test)] mod test_validation;
