mod marshaller_tests;
