//! Liquid sources for every emitted file.
//!
//! Per-dependency lines never appear here: they are computed from the
//! dependency registry and injected as pre-joined blocks, so the templates
//! only carry named substitution slots.

pub const ROOT_CMAKE: &str = r#"cmake_minimum_required(VERSION 3.10)

project({{ project_name }} VERSION 1.0)

set(CMAKE_CXX_STANDARD {{ cpp_standard }})
set(CMAKE_CXX_FLAGS "${CMAKE_CXX_FLAGS} -Wall -Wextra -Wshadow -Wnon-virtual-dtor -pedantic")

set(CMAKE_BINARY_DIR ${CMAKE_SOURCE_DIR}/bin)
set(EXECUTABLE_OUTPUT_PATH ${CMAKE_BINARY_DIR})
set(CMAKE_EXPORT_COMPILE_COMMANDS ON)

enable_testing()

add_subdirectory(lib)
{{ extra_subdirectories }}
add_executable(${CMAKE_PROJECT_NAME} ${PROJECT_SOURCE_DIR}/src/main.cpp)

target_link_libraries(${CMAKE_PROJECT_NAME} ${CMAKE_PROJECT_NAME}_lib)
target_include_directories(${CMAKE_PROJECT_NAME} PRIVATE ${CMAKE_SOURCE_DIR})
"#;

pub const LIB_CMAKE: &str = r#"cmake_minimum_required(VERSION 3.10)

set(LIBRARY_OUTPUT_PATH ${CMAKE_BINARY_DIR}/lib)

set(SOURCES
  ${PROJECT_SOURCE_DIR}/lib/hello.cpp
)

add_library(${CMAKE_PROJECT_NAME}_lib STATIC ${SOURCES})
{{ lib_include_dirs }}
target_link_libraries(${CMAKE_PROJECT_NAME}_lib{{ lib_link_targets }})
"#;

pub const MAIN_CPP: &str = r#"/**
 * Author: {{ authors }}
 */
{{ main_includes }}
#include "lib/hello.h"

int main()
{
  helloWorld();
{{ main_usage }}
  return 0;
}
"#;

pub const HELLO_CPP: &str = r#"/**
 * Author: {{ authors }}
 */

#include <iostream>

int helloWorld()
{
  std::cout << "Hello world!" << std::endl;
  return 0;
}
"#;

pub const HELLO_H: &str = r#"/**
 * Author: {{ authors }}
 */

int helloWorld();
"#;

pub const GITIGNORE: &str = r#"bin/
build/
.clangd/

compile_commands.json
.DS_Store
"#;

pub const RUN_SH: &str = r#"#!/bin/bash

build() {
  if [ ! -d "build" ]; then
    echo "Creating CMake files"
    mkdir build
    cmake -S . -B build
  fi

  cmake --build build -j 16 && make -C build{{ test_run }}
  if [ $? -eq "0" ]; then
    # Link the file for clang
    if [ ! -f compile_commands.json ]; then
      ln -s ./build/compile_commands.json ./
    fi
    echo -e "\n\nBuild successful!\n\n"
    return 0
  else
    echo -e "\n\nBuild failed.\n\n"
    return 1
  fi
}

run() {
  ./bin/{{ project_name }}
}

if [ $# -eq 0 ]; then
  echo "Usage: ./run.sh <build/run/buildrun>"
  exit 1
fi

if [ $1 = "run" ]; then
  run
elif [ $1 = "build" ]; then
  build
elif [ $1 = "buildrun" ]; then
  build
  if [ $? -eq "0" ]; then
    echo -e "Running...\n\n"
    run
  fi
fi
"#;

pub const TEST_CMAKE: &str = r#"set(BINARY ${CMAKE_PROJECT_NAME}_test)

file(GLOB_RECURSE TEST_SOURCES LIST_DIRECTORIES false *.h *.cpp)

set(SOURCES ${TEST_SOURCES})

add_executable(${BINARY} ${TEST_SOURCES})

add_test(NAME ${BINARY} COMMAND ${BINARY})

target_link_libraries(${BINARY} PUBLIC ${CMAKE_PROJECT_NAME}_lib gtest)
target_include_directories(${BINARY} PRIVATE ${CMAKE_SOURCE_DIR})
"#;

pub const TEST_MAIN_CPP: &str = r#"#include <gtest/gtest.h>
{{ test_includes }}
int main(int argc, char **argv)
{
{{ test_setup }}
  ::testing::InitGoogleTest(&argc, argv);
  return RUN_ALL_TESTS();
}
"#;

pub const TEST_HELLO_CPP: &str = r#"#include "lib/hello.h"

#include <gtest/gtest.h>

TEST(HelloWorld, ReturnsZero)
{
  EXPECT_EQ(helloWorld(), 0);
}
"#;
